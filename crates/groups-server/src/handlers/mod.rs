pub mod groups;
pub mod users;

/// Summary shown above a list, e.g. `"3 Groups found."`.
pub fn count_message(count: usize, entity: &str) -> String {
    match count {
        0 => format!("No {entity}s found!"),
        1 => format!("1 {entity} found."),
        n => format!("{n} {entity}s found."),
    }
}
