//! Supplier API Handlers

use axum::{
    Json,
    extract::{Extension, Path, State},
};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN,
    validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};
use shared::models::{Supplier, SupplierCreate, SupplierUpdate};

fn validate_optional_fields(
    phone: &Option<String>,
    email: &Option<String>,
    address: &Option<String>,
    notes: &Option<String>,
) -> AppResult<()> {
    validate_optional_text(phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(email, "email", MAX_EMAIL_LEN)?;
    validate_optional_text(address, "address", MAX_ADDRESS_LEN)?;
    validate_optional_text(notes, "notes", MAX_NOTE_LEN)?;
    Ok(())
}

/// GET /api/suppliers - 全部供应商
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Supplier>>> {
    let snapshot = state.store.load()?;
    Ok(Json(snapshot.suppliers))
}

/// GET /api/suppliers/{id} - 单个供应商
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Supplier>> {
    let snapshot = state.store.load()?;
    let supplier = snapshot
        .suppliers
        .into_iter()
        .find(|s| s.id == id)
        .ok_or_else(|| AppError::not_found(format!("Supplier {} not found", id)))?;
    Ok(Json(supplier))
}

/// POST /api/suppliers - 新建供应商 (名称与联系人必填)
pub async fn create(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Json(payload): Json<SupplierCreate>,
) -> AppResult<Json<Supplier>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.contact, "contact", MAX_NAME_LEN)?;
    validate_optional_fields(
        &payload.phone,
        &payload.email,
        &payload.address,
        &payload.notes,
    )?;

    let _guard = state.store.lock_for_write().await;
    let mut snapshot = state.store.load()?;

    let supplier = Supplier {
        id: shared::snowflake_id(),
        name: payload.name.trim().to_string(),
        contact: payload.contact.trim().to_string(),
        tax_id: payload.tax_id.unwrap_or_default(),
        phone: payload.phone.unwrap_or_default(),
        email: payload.email.unwrap_or_default(),
        address: payload.address.unwrap_or_default(),
        city: payload.city.unwrap_or_default(),
        notes: payload.notes.unwrap_or_default(),
        active: payload.active.unwrap_or(true),
        created_at: shared::now_millis(),
    };
    snapshot.suppliers.push(supplier.clone());
    state.store.save(&snapshot)?;

    tracing::info!(
        operator = %current_user.username,
        supplier_id = supplier.id,
        name = %supplier.name,
        "Supplier created"
    );
    Ok(Json(supplier))
}

/// PUT /api/suppliers/{id} - 更新供应商 (只更新提交的字段)
pub async fn update(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<SupplierUpdate>,
) -> AppResult<Json<Supplier>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(contact) = &payload.contact {
        validate_required_text(contact, "contact", MAX_NAME_LEN)?;
    }
    validate_optional_fields(
        &payload.phone,
        &payload.email,
        &payload.address,
        &payload.notes,
    )?;

    let _guard = state.store.lock_for_write().await;
    let mut snapshot = state.store.load()?;

    let supplier = snapshot
        .suppliers
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or_else(|| AppError::not_found(format!("Supplier {} not found", id)))?;

    if let Some(name) = payload.name {
        supplier.name = name.trim().to_string();
    }
    if let Some(contact) = payload.contact {
        supplier.contact = contact.trim().to_string();
    }
    if let Some(tax_id) = payload.tax_id {
        supplier.tax_id = tax_id;
    }
    if let Some(phone) = payload.phone {
        supplier.phone = phone;
    }
    if let Some(email) = payload.email {
        supplier.email = email;
    }
    if let Some(address) = payload.address {
        supplier.address = address;
    }
    if let Some(city) = payload.city {
        supplier.city = city;
    }
    if let Some(notes) = payload.notes {
        supplier.notes = notes;
    }
    if let Some(active) = payload.active {
        supplier.active = active;
    }
    let updated = supplier.clone();
    state.store.save(&snapshot)?;

    tracing::info!(operator = %current_user.username, supplier_id = id, "Supplier updated");
    Ok(Json(updated))
}

/// DELETE /api/suppliers/{id} - 删除供应商
pub async fn remove(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<Supplier>> {
    let _guard = state.store.lock_for_write().await;
    let mut snapshot = state.store.load()?;

    let idx = snapshot
        .suppliers
        .iter()
        .position(|s| s.id == id)
        .ok_or_else(|| AppError::not_found(format!("Supplier {} not found", id)))?;
    let removed = snapshot.suppliers.remove(idx);
    state.store.save(&snapshot)?;

    tracing::info!(
        operator = %current_user.username,
        supplier_id = id,
        name = %removed.name,
        "Supplier deleted"
    );
    Ok(Json(removed))
}
