//! Cost calculator pages.
//!
//! The calculator sits behind its own unlock form. Once unlocked, every
//! submission re-parses the whole ingredient table, applies the requested
//! edit (add, remove, reset) and recomputes the breakdown. The last inputs are
//! kept in the session so a reload shows the same recipe.

use std::collections::BTreeMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{RawForm, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use bidua_core::calculator::{BulkUnit, CalculatorInputs, CostBreakdown, Ingredient, Unit};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::models::session_keys;
use crate::routes::layout::Layout;
use crate::state::AppState;

// =============================================================================
// Form Parsing
// =============================================================================

/// What the submit button asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalculatorAction {
    #[default]
    Calculate,
    AddIngredient,
    RemoveIngredient(usize),
    Reset,
}

impl CalculatorAction {
    fn parse(value: &str) -> Self {
        match value {
            "add" => Self::AddIngredient,
            "reset" => Self::Reset,
            other => other
                .strip_prefix("remove:")
                .and_then(|index| index.parse().ok())
                .map_or(Self::Calculate, Self::RemoveIngredient),
        }
    }
}

/// Unparseable and non-finite numbers count as zero.
fn number(value: &str) -> f64 {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Split `ingredients[3][name]` into `(3, "name")`.
fn ingredient_field(key: &str) -> Option<(usize, &str)> {
    let rest = key.strip_prefix("ingredients[")?;
    let (index, field) = rest.split_once("][")?;
    Some((index.parse().ok()?, field.strip_suffix(']')?))
}

fn blank_ingredient() -> Ingredient {
    Ingredient::additive(String::new(), 0.0, Unit::G, 0.0, BulkUnit::Kg, 1.0)
}

/// Decode the calculator form.
///
/// Fields the form leaves out keep their default values. The ingredient
/// marked by the `base_index` radio becomes the base; without it the recipe
/// has no base.
#[must_use]
pub fn parse_submission(body: &[u8]) -> (CalculatorInputs, CalculatorAction) {
    let mut inputs = CalculatorInputs::default();
    let mut rows: BTreeMap<usize, Ingredient> = BTreeMap::new();
    let mut base_index: Option<usize> = None;
    let mut action = CalculatorAction::default();

    for (key, value) in url::form_urlencoded::parse(body) {
        match key.as_ref() {
            "jar_size_g" => inputs.jar_size_g = number(&value),
            "num_jars" => inputs.num_jars = value.trim().parse().unwrap_or(0),
            "box_cost" => inputs.box_cost = number(&value),
            "jar_cost" => inputs.jar_cost = number(&value),
            "sticker_cost" => inputs.sticker_cost = number(&value),
            "transport_per_50g" => inputs.transport_per_50g = number(&value),
            "other_op_per_jar" => inputs.other_op_per_jar = number(&value),
            "mrp" => inputs.mrp = number(&value),
            "distributor_price" => inputs.distributor_price = number(&value),
            "base_index" => base_index = value.trim().parse().ok(),
            "action" => action = CalculatorAction::parse(&value),
            other => {
                let Some((index, field)) = ingredient_field(other) else {
                    continue;
                };
                let row = rows.entry(index).or_insert_with(blank_ingredient);
                match field {
                    "name" => row.name = value.trim().to_string(),
                    "quantity" => row.quantity = number(&value),
                    "unit" => row.unit = value.parse().unwrap_or_default(),
                    "bulk_price" => row.bulk_price = number(&value),
                    "bulk_unit" => row.bulk_unit = value.parse().unwrap_or_default(),
                    "density" => row.density = number(&value),
                    _ => {}
                }
            }
        }
    }

    if !rows.is_empty() {
        let base_position = base_index.and_then(|index| rows.keys().position(|&k| k == index));
        inputs.ingredients = rows.into_values().collect();
        if let Some(Err(e)) = base_position.map(|position| inputs.promote_to_base(position)) {
            tracing::debug!(error = %e, "Ignoring base selection");
        }
    }

    (inputs, action)
}

// =============================================================================
// Templates
// =============================================================================

/// Unlock form shown until the calculator password is entered.
#[derive(Template, WebTemplate)]
#[template(path = "calculator/unlock.html")]
pub struct UnlockTemplate {
    pub layout: Layout,
    pub error: Option<String>,
}

/// Calculator with inputs and results.
#[derive(Template, WebTemplate)]
#[template(path = "calculator/show.html")]
pub struct CalculatorTemplate {
    pub layout: Layout,
    pub inputs: CalculatorInputs,
    pub breakdown: Option<CostBreakdown>,
    pub error: Option<String>,
}

impl CalculatorTemplate {
    fn new(layout: Layout, inputs: CalculatorInputs, error: Option<String>) -> Self {
        let (breakdown, error) = match inputs.compute() {
            Ok(breakdown) => (Some(breakdown), error),
            Err(e) => (None, error.or_else(|| Some(e.to_string()))),
        };
        Self {
            layout,
            inputs,
            breakdown,
            error,
        }
    }
}

/// Unlock form data.
#[derive(Debug, Deserialize)]
pub struct UnlockForm {
    pub username: String,
    pub password: String,
}

async fn is_unlocked(session: &Session) -> Result<bool> {
    Ok(session
        .get::<bool>(session_keys::CALCULATOR_UNLOCKED)
        .await?
        .unwrap_or(false))
}

// =============================================================================
// Handlers
// =============================================================================

/// Show the calculator, or the unlock form.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Response> {
    let layout = Layout::load(&session).await;
    if !is_unlocked(&session).await? {
        return Ok(UnlockTemplate {
            layout,
            error: None,
        }
        .into_response());
    }

    let inputs = session
        .get::<CalculatorInputs>(session_keys::CALCULATOR_INPUTS)
        .await?
        .unwrap_or_default();

    Ok(CalculatorTemplate::new(layout, inputs, None).into_response())
}

/// Check the calculator password.
#[instrument(skip(state, session, form), fields(username = %form.username))]
pub async fn unlock(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<UnlockForm>,
) -> Result<Response> {
    match state.credentials().verify(&form.username, &form.password) {
        Ok(_) => {
            session
                .insert(session_keys::CALCULATOR_UNLOCKED, true)
                .await?;
            tracing::info!("Calculator unlocked");
            Ok(Redirect::to("/cost-calculator").into_response())
        }
        Err(e) => {
            tracing::info!("Calculator unlock rejected");
            Ok((
                StatusCode::UNAUTHORIZED,
                UnlockTemplate {
                    layout: Layout::load(&session).await,
                    error: Some(e.to_string()),
                },
            )
                .into_response())
        }
    }
}

/// Apply an edit and recompute.
#[instrument(skip(session, body))]
pub async fn calculate(session: Session, RawForm(body): RawForm) -> Result<Response> {
    if !is_unlocked(&session).await? {
        return Ok(Redirect::to("/cost-calculator").into_response());
    }

    let (mut inputs, action) = parse_submission(&body);
    let mut error = None;

    match action {
        CalculatorAction::Calculate => {}
        CalculatorAction::AddIngredient => inputs.add_additive(),
        CalculatorAction::RemoveIngredient(index) => {
            if let Err(e) = inputs.remove_ingredient(index) {
                error = Some(e.to_string());
            }
        }
        CalculatorAction::Reset => {
            session
                .remove::<CalculatorInputs>(session_keys::CALCULATOR_INPUTS)
                .await?;
            let layout = Layout::load(&session).await;
            return Ok(
                CalculatorTemplate::new(layout, CalculatorInputs::default(), None)
                    .into_response(),
            );
        }
    }

    tracing::debug!(?action, ingredients = inputs.ingredients.len(), "Recalculating");
    session
        .insert(session_keys::CALCULATOR_INPUTS, &inputs)
        .await?;

    let layout = Layout::load(&session).await;
    Ok(CalculatorTemplate::new(layout, inputs, error).into_response())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_submission() {
        let body = b"jar_size_g=30&num_jars=200&box_cost=5&jar_cost=120&sticker_cost=1\
&transport_per_50g=80&other_op_per_jar=3&mrp=3999&distributor_price=1299&base_index=0\
&ingredients%5B0%5D%5Bname%5D=Base&ingredients%5B0%5D%5Bquantity%5D=0\
&ingredients%5B0%5D%5Bunit%5D=g&ingredients%5B0%5D%5Bbulk_price%5D=5000\
&ingredients%5B0%5D%5Bbulk_unit%5D=kg&ingredients%5B0%5D%5Bdensity%5D=1\
&ingredients%5B1%5D%5Bname%5D=Rose+Oil&ingredients%5B1%5D%5Bquantity%5D=20\
&ingredients%5B1%5D%5Bunit%5D=ml&ingredients%5B1%5D%5Bbulk_price%5D=20000\
&ingredients%5B1%5D%5Bbulk_unit%5D=L&ingredients%5B1%5D%5Bdensity%5D=0.95";
        let (inputs, action) = parse_submission(body);

        assert_eq!(action, CalculatorAction::Calculate);
        assert_eq!(inputs.jar_size_g, 30.0);
        assert_eq!(inputs.num_jars, 200);
        assert_eq!(inputs.mrp, 3999.0);
        assert_eq!(inputs.ingredients.len(), 2);
        assert!(inputs.ingredients[0].is_base());
        assert_eq!(inputs.ingredients[1].name, "Rose Oil");
        assert_eq!(inputs.ingredients[1].unit, Unit::Ml);
        assert_eq!(inputs.ingredients[1].bulk_unit, BulkUnit::L);
        assert_eq!(inputs.ingredients[1].density, 0.95);
    }

    #[test]
    fn test_parse_base_follows_radio() {
        let body = b"base_index=4&ingredients[2][name]=A&ingredients[4][name]=B";
        let (inputs, _) = parse_submission(body);
        assert!(!inputs.ingredients[0].is_base());
        assert!(inputs.ingredients[1].is_base());
    }

    #[test]
    fn test_parse_moved_base_demotes_first_row() {
        let body = b"base_index=1&ingredients[0][name]=Cream&ingredients[1][name]=Gel\
&ingredients[2][name]=Oil";
        let (inputs, _) = parse_submission(body);
        let roles: Vec<_> = inputs.ingredients.iter().map(|i| i.role.label()).collect();
        assert_eq!(roles, ["Additive", "Base", "Additive"]);
        assert_eq!(inputs.base().map(|b| b.name.as_str()), Some("Gel"));
    }

    #[test]
    fn test_parse_base_index_without_row_leaves_no_base() {
        let (inputs, _) = parse_submission(b"base_index=7&ingredients[0][name]=Only");
        assert!(inputs.base().is_none());
    }

    #[test]
    fn test_parse_without_base() {
        let body = b"ingredients[0][name]=Only";
        let (inputs, _) = parse_submission(body);
        assert!(inputs.base().is_none());
    }

    #[test]
    fn test_parse_bad_numbers_are_zero() {
        let (inputs, _) = parse_submission(b"jar_size_g=abc&num_jars=-3&mrp=NaN&box_cost=inf");
        assert_eq!(inputs.jar_size_g, 0.0);
        assert_eq!(inputs.num_jars, 0);
        assert_eq!(inputs.mrp, 0.0);
        assert_eq!(inputs.box_cost, 0.0);
        // Missing ingredient table keeps the default recipe.
        assert_eq!(inputs.ingredients.len(), 3);
    }

    #[test]
    fn test_parse_actions() {
        assert_eq!(CalculatorAction::parse("add"), CalculatorAction::AddIngredient);
        assert_eq!(CalculatorAction::parse("reset"), CalculatorAction::Reset);
        assert_eq!(
            CalculatorAction::parse("remove:2"),
            CalculatorAction::RemoveIngredient(2)
        );
        assert_eq!(CalculatorAction::parse("remove:x"), CalculatorAction::Calculate);
        assert_eq!(CalculatorAction::parse(""), CalculatorAction::Calculate);
    }
}
