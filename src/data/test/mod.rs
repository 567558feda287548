mod guild_parser;
