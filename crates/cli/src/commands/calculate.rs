//! Recipe costing.

use std::io::Write;
use std::path::Path;

use bidua_core::calculator::{CalculatorInputs, CostBreakdown};
use bidua_core::{format_inr_f64, format_number};
use tracing::info;

use super::CommandError;

/// Parse a YAML recipe. Fields left out take their default values.
///
/// # Errors
///
/// Returns the YAML error for malformed input.
pub fn parse_recipe(content: &str) -> Result<CalculatorInputs, serde_yaml::Error> {
    serde_yaml::from_str(content)
}

async fn load_recipe(path: Option<&Path>) -> Result<CalculatorInputs, CommandError> {
    let Some(path) = path else {
        info!("Using the built-in recipe");
        return Ok(CalculatorInputs::default());
    };

    info!(path = %path.display(), "Loading recipe");
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CommandError::Read {
            path: path.display().to_string(),
            source,
        })?;
    Ok(parse_recipe(&content)?)
}

/// Cost a recipe and report the breakdown.
///
/// # Errors
///
/// Returns an error if the recipe cannot be read or has no base ingredient.
pub async fn run(recipe: Option<&Path>, json: bool) -> Result<(), CommandError> {
    let inputs = load_recipe(recipe).await?;
    let breakdown = inputs.compute()?;

    if json {
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer_pretty(&mut stdout, &breakdown)?;
        writeln!(stdout)?;
    } else {
        log_breakdown(&inputs, &breakdown);
    }
    Ok(())
}

fn log_breakdown(inputs: &CalculatorInputs, breakdown: &CostBreakdown) {
    info!(
        "{} jars x {} g = {} g (base {} g per jar)",
        inputs.num_jars,
        format_number(inputs.jar_size_g),
        format_number(breakdown.total_output_g),
        format_number(breakdown.base_quantity_per_jar_g),
    );
    for row in &breakdown.ingredients {
        info!(
            "  {:<24} {:>10} {:<2} {:>12}/jar {:>14}/batch",
            row.name,
            format_number(row.quantity_per_jar),
            row.unit,
            format_inr_f64(row.cost_per_jar, 2),
            format_inr_f64(row.batch_cost, 2),
        );
    }
    info!("Materials:  {}", format_inr_f64(breakdown.material_per_jar, 2));
    info!("Packaging:  {}", format_inr_f64(breakdown.packaging_per_jar, 2));
    info!("Transport:  {}", format_inr_f64(breakdown.transport_per_jar, 2));
    info!("Other ops:  {}", format_inr_f64(breakdown.other_op_per_jar, 2));
    info!("Cost/jar:   {}", format_inr_f64(breakdown.total_cost_per_jar, 2));
    info!("Batch cost: {}", format_inr_f64(breakdown.total_batch_cost, 2));

    for (label, margin) in [("MRP", &breakdown.mrp), ("Distributor", &breakdown.distributor)] {
        info!(
            "{label} {}: profit {}/jar, margin {:.2}%, batch profit {}",
            format_inr_f64(margin.price, 2),
            format_inr_f64(margin.profit_per_jar, 2),
            margin.margin_percent(),
            format_inr_f64(margin.batch_profit, 2),
        );
    }
}

/// Write the default recipe to `path`.
///
/// # Errors
///
/// Refuses to replace an existing file unless `force` is set.
pub async fn init(path: &Path, force: bool) -> Result<(), CommandError> {
    let path_display = path.display().to_string();
    if !force && tokio::fs::try_exists(path).await.unwrap_or(false) {
        return Err(CommandError::Exists(path_display));
    }

    let yaml = serde_yaml::to_string(&CalculatorInputs::default())?;
    tokio::fs::write(path, yaml)
        .await
        .map_err(|source| CommandError::Write {
            path: path_display.clone(),
            source,
        })?;

    info!(path = %path_display, "Recipe written");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use bidua_core::calculator::{CalculatorError, IngredientRole, Unit};

    use super::*;

    #[test]
    fn test_partial_recipe_keeps_defaults() {
        let inputs = parse_recipe("num_jars: 250\nmrp: 3999\n").unwrap();
        assert_eq!(inputs.num_jars, 250);
        assert!((inputs.mrp - 3999.0).abs() < f64::EPSILON);
        assert_eq!(inputs.ingredients, CalculatorInputs::default().ingredients);
    }

    #[test]
    fn test_recipe_with_ingredients() {
        let yaml = "\
jar_size_g: 100
ingredients:
  - name: Shea Butter
    role: base
    bulk_price: 900
  - name: Rose Water
    quantity: 100
    unit: ml
    bulk_price: 400
    bulk_unit: L
";
        let inputs = parse_recipe(yaml).unwrap();
        assert_eq!(inputs.ingredients.len(), 2);
        assert_eq!(inputs.ingredients[0].role, IngredientRole::Base);
        assert_eq!(inputs.ingredients[1].unit, Unit::Ml);
        assert!((inputs.ingredients[1].density - 1.0).abs() < f64::EPSILON);

        let breakdown = inputs.compute().unwrap();
        assert!((breakdown.jar_mass_g() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_recipe_without_base_fails_to_compute() {
        let inputs = parse_recipe("ingredients:\n  - name: Water\n    quantity: 10\n").unwrap();
        assert_eq!(inputs.compute(), Err(CalculatorError::NoBaseIngredient));
    }

    #[test]
    fn test_default_recipe_round_trips_through_yaml() {
        let yaml = serde_yaml::to_string(&CalculatorInputs::default()).unwrap();
        assert_eq!(parse_recipe(&yaml).unwrap(), CalculatorInputs::default());
    }

    #[test]
    fn test_malformed_recipe_is_rejected() {
        assert!(parse_recipe("num_jars: lots").is_err());
    }
}
