use rocket::FromForm;
use rocket::serde::Serialize;
use validator::Validate;

/// Row of the `equipos` table.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq, sqlx::FromRow)]
pub struct Equipment {
    pub id: i32,
    pub system_code: String,
    pub brand: String,
    pub reference: String,
    pub equipment_type: String,
    pub model: String,
    pub serial: String,
    pub status: String,
}

/// Registration form posted by `registerdevice`. Field names follow the form markup.
#[derive(FromForm, Debug, Clone, Default, Validate)]
pub struct EquipmentRequest {
    #[field(name = "CodigoSistema")]
    #[validate(length(min = 1, message = "System code is required"))]
    pub system_code: String,
    #[field(name = "Marca")]
    pub brand: String,
    #[field(name = "REF")]
    pub reference: String,
    #[field(name = "TipoEquipo")]
    pub equipment_type: String,
    #[field(name = "Modelo")]
    pub model: String,
    #[field(name = "Serial")]
    pub serial: String,
    #[field(name = "Estado")]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_code_is_required() {
        let request = EquipmentRequest::default();
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("system_code"));
    }
}
