use serenity::model::id::GuildId;
use rust_decimal::{
    Decimal,
    prelude::FromPrimitive
};

use crate::{Database, Error};

impl Database {
    pub async fn get_prefix(&self, guild_id: GuildId) -> Result<Option<String>, Error> {
        let mut conn = self.pool.get().await?;
        let guild = Decimal::from_u64(guild_id.get()).ok_or("guild id does not fit in a decimal")?;
        let res = conn.query(
            "SELECT prefix FROM [Omega].[Guild] WHERE id = @P1;",
            &[&guild])
            .await?
            .into_row()
            .await?;

        Ok(res.and_then(|row| {
            let prefix: Option<&str> = row.get(0);
            prefix.map(str::to_string)
        }))
    }

    pub async fn set_prefix(&self, guild_id: GuildId, prefix: &str) -> Result<(), Error> {
        let mut conn = self.pool.get().await?;
        let guild = Decimal::from_u64(guild_id.get()).ok_or("guild id does not fit in a decimal")?;
        conn.execute(
            "MERGE [Omega].[Guild] AS target USING (SELECT @P1 AS id) AS source ON target.id = source.id \
             WHEN MATCHED THEN UPDATE SET prefix = @P2 \
             WHEN NOT MATCHED THEN INSERT (id, prefix) VALUES (@P1, @P2);",
            &[&guild, &prefix])
            .await?;

        Ok(())
    }
}
