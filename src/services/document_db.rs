use crate::{Database, Error};

// Each document is stored whole, as JSON text keyed by its id.
impl Database {
    pub async fn find_document(&self, id: &str) -> Result<Option<String>, Error> {
        let mut conn = self.pool.get().await?;
        let res = conn.query(
            "SELECT document FROM [Omega].[Documents] WHERE id = @P1;",
            &[&id])
            .await?
            .into_row()
            .await?;

        Ok(res.and_then(|row| {
            let document: Option<&str> = row.get(0);
            document.map(str::to_string)
        }))
    }

    pub async fn insert_document(&self, id: &str, document: &str) -> Result<(), Error> {
        let mut conn = self.pool.get().await?;
        conn.execute(
            "INSERT INTO [Omega].[Documents] (id, document) VALUES (@P1, @P2);",
            &[&id, &document])
            .await?;

        Ok(())
    }

    /// Overwrites an existing document; does nothing if the id is missing.
    pub async fn update_document(&self, id: &str, document: &str) -> Result<(), Error> {
        let mut conn = self.pool.get().await?;
        conn.execute(
            "UPDATE [Omega].[Documents] SET document = @P2 WHERE id = @P1;",
            &[&id, &document])
            .await?;

        Ok(())
    }
}
