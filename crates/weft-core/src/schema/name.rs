use heck::ToSnakeCase;

/// Derives a column name from a field name.
///
/// Case boundaries become underscores and everything is lowercased. Runs of
/// capitals are treated as one word, so `UserID` becomes `user_id` and `ID`
/// becomes `id`.
pub fn snake_case(name: &str) -> String {
    name.to_snake_case()
}
