// All repository functions are generic over `E: Executor<'e, Database = Sqlite>`
// so they accept both a `&SqlitePool` (direct query) and a `&mut Transaction` (atomic operations).

pub mod card;
pub mod deck;
pub mod user;

/// Turn a substring filter into a `LIKE` pattern matched with `ESCAPE '\'`.
///
/// Returns `None` for a missing or empty filter, which the list queries treat as
/// "match everything".
pub fn contains_pattern(filter: Option<&str>) -> Option<String> {
    let filter = filter.filter(|f| !f.is_empty())?;
    let mut pattern = String::with_capacity(filter.len() + 2);
    pattern.push('%');
    for c in filter.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    Some(pattern)
}
