use crate::error::Result;
use crate::storage::table::Table;
use opendal::Operator;

/// Trait for reading CSV objects as tables.
pub trait TableReader {
    /// Fetch an object and parse it as CSV with a header row.
    async fn read_table(&self, key: &str) -> Result<Table>;
}

/// OpenDAL implementation of table reading
pub struct OpenDalTableReader {
    operator: Operator,
}

impl OpenDalTableReader {
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }
}

impl TableReader for OpenDalTableReader {
    async fn read_table(&self, key: &str) -> Result<Table> {
        let content = self.operator.read(key).await?;
        Table::from_csv(&content.to_vec())
    }
}
