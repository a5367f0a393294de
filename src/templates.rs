use rocket::fairing::Fairing;
use rocket_dyn_templates::Template;
use rocket_dyn_templates::tera::{self, Value};
use std::collections::HashMap;

fn int_arg(args: &HashMap<String, Value>, function: &str, name: &str) -> tera::Result<i64> {
    args.get(name)
        .and_then(Value::as_i64)
        .ok_or_else(|| tera::Error::msg(format!("`{function}` expects an integer argument `{name}`")))
}

/// `{{ sumar(a=pagina, b=1) }}`
pub fn sumar(args: &HashMap<String, Value>) -> tera::Result<Value> {
    let a = int_arg(args, "sumar", "a")?;
    let b = int_arg(args, "sumar", "b")?;
    Ok(Value::from(a.saturating_add(b)))
}

/// `{{ restar(a=pagina, b=1) }}`
pub fn restar(args: &HashMap<String, Value>) -> tera::Result<Value> {
    let a = int_arg(args, "restar", "a")?;
    let b = int_arg(args, "restar", "b")?;
    Ok(Value::from(a.saturating_sub(b)))
}

/// Template engine fairing with the pagination helpers registered.
pub fn fairing() -> impl Fairing {
    Template::custom(|engines| {
        engines.tera.register_function("sumar", sumar);
        engines.tera.register_function("restar", restar);
    })
}
