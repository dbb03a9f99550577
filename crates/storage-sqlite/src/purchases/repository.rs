use stockfolio_core::purchases::{
    NewStockPurchase, StockPurchase, StockPurchaseRepositoryTrait,
};
use stockfolio_core::{Error, Result};

use super::model::{NewStockPurchaseDB, StockPurchaseDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::stock_purchases;
use crate::schema::stock_purchases::dsl::*;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct StockPurchaseRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl StockPurchaseRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        StockPurchaseRepository { pool, writer }
    }

    pub fn load_purchases_impl(&self) -> Result<Vec<StockPurchase>> {
        let mut conn = get_connection(&self.pool)?;
        let purchases_db = stock_purchases
            .filter(is_deleted.eq(false))
            .order(created_at.desc())
            .load::<StockPurchaseDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(purchases_db.into_iter().map(StockPurchase::from).collect())
    }

    pub fn find_purchase_impl(&self, purchase_id: &str) -> Result<StockPurchase> {
        let mut conn = get_connection(&self.pool)?;
        let purchase_db = stock_purchases
            .filter(id.eq(purchase_id))
            .filter(is_deleted.eq(false))
            .first::<StockPurchaseDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?
            .ok_or_else(|| Error::NotFound("Stock purchase not found".to_string()))?;
        Ok(StockPurchase::from(purchase_db))
    }
}

#[async_trait]
impl StockPurchaseRepositoryTrait for StockPurchaseRepository {
    fn load_purchases(&self) -> Result<Vec<StockPurchase>> {
        self.load_purchases_impl()
    }

    fn find_purchase(&self, purchase_id: &str) -> Result<StockPurchase> {
        self.find_purchase_impl(purchase_id)
    }

    async fn insert_new_purchase(&self, new_purchase: NewStockPurchase) -> Result<StockPurchase> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<StockPurchase> {
                let mut new_purchase_db: NewStockPurchaseDB = new_purchase.into();
                new_purchase_db.id = Some(
                    new_purchase_db
                        .id
                        .unwrap_or_else(|| Uuid::new_v4().to_string()),
                );

                let result_db = diesel::insert_into(stock_purchases::table)
                    .values(&new_purchase_db)
                    .returning(StockPurchaseDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(StockPurchase::from(result_db))
            })
            .await
    }

    async fn update_purchase(&self, purchase_update: StockPurchase) -> Result<StockPurchase> {
        let purchase_id_owned = purchase_update.id.clone();
        let mut purchase_db: StockPurchaseDB = (&purchase_update).into();
        purchase_db.updated_at = Utc::now().to_rfc3339();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<StockPurchase> {
                diesel::update(stock_purchases.find(purchase_id_owned.clone()))
                    .set(&purchase_db)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let result_db = stock_purchases
                    .filter(id.eq(purchase_id_owned))
                    .first::<StockPurchaseDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(StockPurchase::from(result_db))
            })
            .await
    }

    async fn delete_purchase(&self, purchase_id: String) -> Result<StockPurchase> {
        let existing = self.find_purchase_impl(&purchase_id)?;

        // Soft delete: the row stays for audit, list queries skip it.
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::update(stock_purchases.find(purchase_id))
                    .set((
                        is_deleted.eq(true),
                        updated_at.eq(Utc::now().to_rfc3339()),
                    ))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await?;

        Ok(existing)
    }

    fn ping(&self) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::sql_query("SELECT 1")
            .execute(&mut conn)
            .map_err(StorageError::from)?;
        Ok(())
    }
}
