use crate::database::postgres_repository::PostgresRepository;
use crate::error::app_error::AppError;
use crate::models::equipment::{Equipment, EquipmentRequest};
use crate::models::pagination::PageParams;

#[async_trait::async_trait]
pub trait EquipmentRepository {
    async fn insert_equipment(&self, request: &EquipmentRequest) -> Result<Equipment, AppError>;
    /// Returns the requested page ordered by id. Pages past the end are empty.
    async fn list_equipment_page(&self, params: &PageParams) -> Result<Vec<Equipment>, AppError>;
    async fn count_equipment(&self) -> Result<i64, AppError>;
}

#[async_trait::async_trait]
impl EquipmentRepository for PostgresRepository {
    async fn insert_equipment(&self, request: &EquipmentRequest) -> Result<Equipment, AppError> {
        let equipment = sqlx::query_as::<_, Equipment>(
            r#"
            INSERT INTO equipos (codigo_sistema, marca, "ref", tipo_equipo, modelo, serial, estado)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id,
                      codigo_sistema AS system_code,
                      marca AS brand,
                      "ref" AS reference,
                      tipo_equipo AS equipment_type,
                      modelo AS model,
                      serial,
                      estado AS status
            "#,
        )
        .bind(&request.system_code)
        .bind(&request.brand)
        .bind(&request.reference)
        .bind(&request.equipment_type)
        .bind(&request.model)
        .bind(&request.serial)
        .bind(&request.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::db("Failed to insert equipment", e))?;

        Ok(equipment)
    }

    async fn list_equipment_page(&self, params: &PageParams) -> Result<Vec<Equipment>, AppError> {
        let equipment = sqlx::query_as::<_, Equipment>(
            r#"
            SELECT id,
                   codigo_sistema AS system_code,
                   marca AS brand,
                   "ref" AS reference,
                   tipo_equipo AS equipment_type,
                   modelo AS model,
                   serial,
                   estado AS status
            FROM equipos
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(params.limit())
        .bind(params.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::db("Failed to list equipment", e))?;

        Ok(equipment)
    }

    async fn count_equipment(&self) -> Result<i64, AppError> {
        #[derive(sqlx::FromRow)]
        struct CountRow {
            total: i64,
        }

        let count_row = sqlx::query_as::<_, CountRow>("SELECT COUNT(*) AS total FROM equipos")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::db("Failed to count equipment", e))?;

        Ok(count_row.total)
    }
}
