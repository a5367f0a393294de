use crate::database::equipment::EquipmentRepository;
use crate::database::user::UserRepository;
use crate::error::app_error::AppError;
use crate::models::equipment::{Equipment, EquipmentRequest};
use crate::models::pagination::PageParams;
use crate::models::user::User;
use std::sync::Mutex;

impl Equipment {
    fn from_request(id: i32, request: &EquipmentRequest) -> Self {
        Self {
            id,
            system_code: request.system_code.clone(),
            brand: request.brand.clone(),
            reference: request.reference.clone(),
            equipment_type: request.equipment_type.clone(),
            model: request.model.clone(),
            serial: request.serial.clone(),
            status: request.status.clone(),
        }
    }
}

pub fn sample_equipment_request(system_code: &str) -> EquipmentRequest {
    EquipmentRequest {
        system_code: system_code.to_string(),
        brand: "Dell".to_string(),
        reference: "R-100".to_string(),
        equipment_type: "Laptop".to_string(),
        model: "Latitude 5440".to_string(),
        serial: format!("SN-{system_code}"),
        status: "Active".to_string(),
    }
}

/// Repository backed by vectors, mirroring the table constraints the
/// Postgres implementation relies on (unique login, id ordering).
#[derive(Default)]
pub struct InMemoryRepository {
    users: Mutex<Vec<User>>,
    equipment: Mutex<Vec<Equipment>>,
}

impl InMemoryRepository {
    pub fn stored_user(&self, username: &str) -> Option<User> {
        self.users.lock().unwrap().iter().find(|user| user.username == username).cloned()
    }
}

#[async_trait::async_trait]
impl UserRepository for InMemoryRepository {
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        Ok(self.stored_user(username))
    }

    async fn create_user(&self, username: &str, password_hash: &str) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|user| user.username == username) {
            return Err(AppError::UserAlreadyExists(username.to_string()));
        }

        let user = User {
            id: users.len() as i32 + 1,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        };
        users.push(user.clone());
        Ok(user)
    }
}

#[async_trait::async_trait]
impl EquipmentRepository for InMemoryRepository {
    async fn insert_equipment(&self, request: &EquipmentRequest) -> Result<Equipment, AppError> {
        let mut equipment = self.equipment.lock().unwrap();
        let record = Equipment::from_request(equipment.len() as i32 + 1, request);
        equipment.push(record.clone());
        Ok(record)
    }

    async fn list_equipment_page(&self, params: &PageParams) -> Result<Vec<Equipment>, AppError> {
        let mut equipment = self.equipment.lock().unwrap().clone();
        equipment.sort_by_key(|record| record.id);
        Ok(equipment
            .into_iter()
            .skip(params.offset() as usize)
            .take(params.limit() as usize)
            .collect())
    }

    async fn count_equipment(&self) -> Result<i64, AppError> {
        Ok(self.equipment.lock().unwrap().len() as i64)
    }
}
