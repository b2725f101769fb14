#[derive(Debug, Clone, Default)]
pub struct LookupProductInput {
    pub query: Option<String>,
}
