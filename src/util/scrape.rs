//! Text extraction from database site pages.
//!
//! Pages are not parsed as HTML. The icon name sits in an inline script call such as
//! `Icon.create('inv_sword_01', 2, null, 0)` and is pulled out with plain text search.

/// Marker that precedes the icon name in a page's inline script.
pub const ICON_MARKER: &str = "Icon.create";

/// Extracts the icon name from the first line of `body` containing [`ICON_MARKER`].
///
/// Only the first matching line is considered. Within it, the text after the last
/// occurrence of the marker is split on `'` and the second field is the icon name.
///
/// # Returns
/// - `Some(&str)` - Icon name as written in the page
/// - `None` - No marker line, or the marker line does not carry a quoted name
pub fn extract_icon_name(body: &str) -> Option<&str> {
    let line = body.lines().find(|line| line.contains(ICON_MARKER))?;

    let call = line.trim().rsplit(ICON_MARKER).next()?;

    call.split('\'').nth(1).filter(|icon| !icon.is_empty())
}
