use crate::error::Result;
use crate::storage::table::Table;
use opendal::Operator;

/// Trait for storing tables as CSV objects.
pub trait TableWriter {
    /// Serialize a table and store it under `key` in a single put.
    async fn write_table(&self, table: &Table, key: &str) -> Result<()>;
}

/// OpenDAL implementation of table writing
pub struct OpenDalTableWriter {
    operator: Operator,
}

impl OpenDalTableWriter {
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }
}

impl TableWriter for OpenDalTableWriter {
    async fn write_table(&self, table: &Table, key: &str) -> Result<()> {
        let content = table.to_csv()?;
        self.operator.write(key, content).await?;
        Ok(())
    }
}
