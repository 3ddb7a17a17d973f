#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchCurrentAccount { generation: u64 },
    SubmitSearch { query: String },
}
