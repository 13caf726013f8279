//! Recipe bill-of-materials and profit/loss calculator.
//!
//! A formulation has exactly one base ingredient and any number of
//! additives. Additive quantities are given per bulk unit (kg or L) of base;
//! the base quantity per jar is whatever remains once the additives are
//! accounted for, so the ingredient masses in a jar always add up to the
//! jar size.
//!
//! All arithmetic is `f64` with no rounding; callers round for display.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors from editing or evaluating a formulation.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("no base ingredient defined")]
    NoBaseIngredient,
    #[error("the base ingredient cannot be removed")]
    BaseNotRemovable,
    #[error("at least one ingredient is required")]
    LastIngredient,
    #[error("no ingredient at position {0}")]
    NoSuchIngredient(usize),
    #[error("unknown unit: {0}")]
    UnknownUnit(String),
}

// =============================================================================
// Units
// =============================================================================

/// Unit an ingredient quantity is measured in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    #[default]
    #[serde(rename = "g")]
    G,
    #[serde(rename = "ml")]
    Ml,
}

impl Unit {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::G => "g",
            Self::Ml => "ml",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "g" => Ok(Self::G),
            "ml" => Ok(Self::Ml),
            other => Err(CalculatorError::UnknownUnit(other.to_string())),
        }
    }
}

/// Unit a bulk price is quoted per.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BulkUnit {
    #[default]
    #[serde(rename = "kg")]
    Kg,
    #[serde(rename = "L")]
    L,
}

impl BulkUnit {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::L => "L",
        }
    }
}

impl fmt::Display for BulkUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BulkUnit {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kg" => Ok(Self::Kg),
            "L" | "l" => Ok(Self::L),
            other => Err(CalculatorError::UnknownUnit(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientRole {
    Base,
    #[default]
    Additive,
}

impl IngredientRole {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::Additive => "Additive",
        }
    }
}

// =============================================================================
// Inputs
// =============================================================================

const fn default_density() -> f64 {
    1.0
}

/// One line of the recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// For additives: amount per bulk unit of base. Ignored for the base.
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub unit: Unit,
    /// Rupees per kg or per L.
    #[serde(default)]
    pub bulk_price: f64,
    #[serde(default)]
    pub bulk_unit: BulkUnit,
    #[serde(default)]
    pub role: IngredientRole,
    /// g/ml, only meaningful for `ml` quantities.
    #[serde(default = "default_density")]
    pub density: f64,
}

impl Ingredient {
    #[must_use]
    pub fn base(name: impl Into<String>, bulk_price: f64) -> Self {
        Self {
            name: name.into(),
            quantity: 0.0,
            unit: Unit::G,
            bulk_price,
            bulk_unit: BulkUnit::Kg,
            role: IngredientRole::Base,
            density: 1.0,
        }
    }

    #[must_use]
    pub fn additive(
        name: impl Into<String>,
        quantity: f64,
        unit: Unit,
        bulk_price: f64,
        bulk_unit: BulkUnit,
        density: f64,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit,
            bulk_price,
            bulk_unit,
            role: IngredientRole::Additive,
            density,
        }
    }

    /// The blank additive appended by "add ingredient".
    #[must_use]
    pub fn new_additive() -> Self {
        Self::additive("New Ingredient", 100.0, Unit::Ml, 1000.0, BulkUnit::L, 1.0)
    }

    #[must_use]
    pub fn is_base(&self) -> bool {
        self.role == IngredientRole::Base
    }

    /// Density used for ml → g conversion. Unusable values count as water.
    fn effective_density(&self) -> f64 {
        let density = finite(self.density);
        if density > 0.0 { density } else { 1.0 }
    }

    /// Kilograms of this additive per kilogram of base.
    fn kg_per_base_kg(&self) -> f64 {
        let quantity = finite(self.quantity) / 1000.0;
        match self.unit {
            Unit::Ml => quantity * self.effective_density(),
            Unit::G => quantity,
        }
    }

    /// Rupees per g (bulk kg) or per ml (bulk L).
    fn price_per_unit(&self) -> f64 {
        finite(self.bulk_price) / 1000.0
    }

    /// Convert an amount in this ingredient's own unit to grams.
    fn to_grams(&self, amount: f64) -> f64 {
        match self.unit {
            Unit::Ml => amount * self.effective_density(),
            Unit::G => amount,
        }
    }
}

/// Everything the calculator needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorInputs {
    pub jar_size_g: f64,
    pub num_jars: u32,
    pub ingredients: Vec<Ingredient>,
    pub box_cost: f64,
    pub jar_cost: f64,
    pub sticker_cost: f64,
    pub transport_per_50g: f64,
    pub other_op_per_jar: f64,
    pub mrp: f64,
    pub distributor_price: f64,
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self {
            jar_size_g: 50.0,
            num_jars: 100,
            ingredients: vec![
                Ingredient::base("Base Cream Material", 6000.0),
                Ingredient::additive("Saffron Oil", 250.0, Unit::Ml, 11_000.0, BulkUnit::L, 1.0),
                Ingredient::additive("Essential Oil", 50.0, Unit::Ml, 8000.0, BulkUnit::L, 0.9),
            ],
            box_cost: 4.0,
            jar_cost: 135.0,
            sticker_cost: 2.0,
            transport_per_50g: 100.0,
            other_op_per_jar: 0.0,
            mrp: 4999.0,
            distributor_price: 1499.0,
        }
    }
}

impl CalculatorInputs {
    /// Append a blank additive.
    pub fn add_additive(&mut self) {
        self.ingredients.push(Ingredient::new_additive());
    }

    /// Make the ingredient at `index` the base, demoting any previous base.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::NoSuchIngredient`] for a bad index.
    pub fn promote_to_base(&mut self, index: usize) -> Result<(), CalculatorError> {
        if index >= self.ingredients.len() {
            return Err(CalculatorError::NoSuchIngredient(index));
        }
        for (i, ingredient) in self.ingredients.iter_mut().enumerate() {
            ingredient.role = if i == index {
                IngredientRole::Base
            } else {
                IngredientRole::Additive
            };
        }
        Ok(())
    }

    /// Remove the ingredient at `index`.
    ///
    /// # Errors
    ///
    /// The base and the last remaining ingredient cannot be removed.
    pub fn remove_ingredient(&mut self, index: usize) -> Result<Ingredient, CalculatorError> {
        let ingredient = self
            .ingredients
            .get(index)
            .ok_or(CalculatorError::NoSuchIngredient(index))?;
        if ingredient.is_base() {
            return Err(CalculatorError::BaseNotRemovable);
        }
        if self.ingredients.len() <= 1 {
            return Err(CalculatorError::LastIngredient);
        }
        Ok(self.ingredients.remove(index))
    }

    #[must_use]
    pub fn base(&self) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.is_base())
    }

    /// Total grams produced by the batch.
    #[must_use]
    pub fn total_output_g(&self) -> f64 {
        f64::from(self.num_jars) * finite(self.jar_size_g)
    }

    #[must_use]
    pub fn packaging_per_jar(&self) -> f64 {
        finite(self.box_cost) + finite(self.jar_cost) + finite(self.sticker_cost)
    }

    #[must_use]
    pub fn transport_per_jar(&self) -> f64 {
        finite(self.transport_per_50g) * (finite(self.jar_size_g) / 50.0)
    }

    /// Evaluate the formulation.
    ///
    /// # Errors
    ///
    /// Returns [`CalculatorError::NoBaseIngredient`] when no ingredient holds
    /// the base role.
    pub fn compute(&self) -> Result<CostBreakdown, CalculatorError> {
        let base = self.base().ok_or(CalculatorError::NoBaseIngredient)?;
        let jars = f64::from(self.num_jars);

        let additive_ratio: f64 = self
            .ingredients
            .iter()
            .filter(|i| !i.is_base())
            .map(Ingredient::kg_per_base_kg)
            .sum();
        let base_g = finite(self.jar_size_g) / (1.0 + additive_ratio);

        let ingredients: Vec<IngredientCost> = self
            .ingredients
            .iter()
            .map(|ingredient| {
                let price_per_unit = ingredient.price_per_unit();
                let (quantity_per_jar, mass_per_jar_g) = if ingredient.is_base() {
                    (base_g, base_g)
                } else {
                    let per_jar = finite(ingredient.quantity) * base_g / 1000.0;
                    (per_jar, ingredient.to_grams(per_jar))
                };
                let cost_per_jar = quantity_per_jar * price_per_unit;
                IngredientCost {
                    name: ingredient.name.clone(),
                    role: ingredient.role,
                    unit: ingredient.unit,
                    price_per_unit,
                    quantity_per_jar,
                    mass_per_jar_g,
                    cost_per_jar,
                    batch_cost: cost_per_jar * jars,
                    batch_quantity: ingredient.to_grams(quantity_per_jar) * jars,
                }
            })
            .collect();

        let material_per_jar: f64 = ingredients.iter().map(|i| i.cost_per_jar).sum();
        let total_material: f64 = ingredients.iter().map(|i| i.batch_cost).sum();
        let packaging_per_jar = self.packaging_per_jar();
        let transport_per_jar = self.transport_per_jar();
        let other_op_per_jar = finite(self.other_op_per_jar);
        let total_cost_per_jar =
            material_per_jar + packaging_per_jar + transport_per_jar + other_op_per_jar;

        let total_packaging = packaging_per_jar * jars;
        let total_transport = transport_per_jar * jars;
        let total_other_op = other_op_per_jar * jars;
        let total_batch_cost = total_material + total_packaging + total_transport + total_other_op;

        Ok(CostBreakdown {
            total_output_g: self.total_output_g(),
            base_quantity_per_jar_g: base_g,
            ingredients,
            material_per_jar,
            packaging_per_jar,
            transport_per_jar,
            other_op_per_jar,
            total_cost_per_jar,
            total_material,
            total_packaging,
            total_transport,
            total_other_op,
            total_batch_cost,
            mrp: Margin::at(finite(self.mrp), total_cost_per_jar, jars, total_batch_cost),
            distributor: Margin::at(
                finite(self.distributor_price),
                total_cost_per_jar,
                jars,
                total_batch_cost,
            ),
        })
    }
}

const fn finite(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

// =============================================================================
// Outputs
// =============================================================================

/// Cost of one recipe line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientCost {
    pub name: String,
    pub role: IngredientRole,
    pub unit: Unit,
    pub price_per_unit: f64,
    /// In the ingredient's own unit.
    pub quantity_per_jar: f64,
    pub mass_per_jar_g: f64,
    pub cost_per_jar: f64,
    pub batch_cost: f64,
    /// Grams required for the whole batch.
    pub batch_quantity: f64,
}

/// Profitability at one selling price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
    pub price: f64,
    pub profit_per_jar: f64,
    /// Fraction of the price, 0 when the price is 0.
    pub margin: f64,
    pub revenue: f64,
    pub batch_profit: f64,
}

impl Margin {
    fn at(price: f64, cost_per_jar: f64, jars: f64, batch_cost: f64) -> Self {
        let profit_per_jar = price - cost_per_jar;
        let revenue = price * jars;
        Self {
            price,
            profit_per_jar,
            margin: if price == 0.0 { 0.0 } else { profit_per_jar / price },
            revenue,
            batch_profit: revenue - batch_cost,
        }
    }

    #[must_use]
    pub fn is_profitable(&self) -> bool {
        self.profit_per_jar >= 0.0
    }

    #[must_use]
    pub fn margin_percent(&self) -> f64 {
        self.margin * 100.0
    }
}

/// Full result of [`CalculatorInputs::compute`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub total_output_g: f64,
    pub base_quantity_per_jar_g: f64,
    pub ingredients: Vec<IngredientCost>,
    pub material_per_jar: f64,
    pub packaging_per_jar: f64,
    pub transport_per_jar: f64,
    pub other_op_per_jar: f64,
    pub total_cost_per_jar: f64,
    pub total_material: f64,
    pub total_packaging: f64,
    pub total_transport: f64,
    pub total_other_op: f64,
    pub total_batch_cost: f64,
    pub mrp: Margin,
    pub distributor: Margin,
}

impl CostBreakdown {
    /// Sum of per-jar ingredient masses in grams.
    #[must_use]
    pub fn jar_mass_g(&self) -> f64 {
        self.ingredients.iter().map(|i| i.mass_per_jar_g).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn test_defaults() {
        let inputs = CalculatorInputs::default();
        assert_eq!(inputs.jar_size_g, 50.0);
        assert_eq!(inputs.num_jars, 100);
        assert_eq!(inputs.ingredients.len(), 3);
        assert_eq!(inputs.base().unwrap().name, "Base Cream Material");
        assert_eq!(inputs.packaging_per_jar(), 141.0);
        assert_eq!(inputs.transport_per_jar(), 100.0);
    }

    #[test]
    fn test_default_breakdown() {
        let breakdown = CalculatorInputs::default().compute().unwrap();

        // T = 0.25 + 0.05 * 0.9 = 0.295
        let base_g = 50.0 / 1.295;
        assert!(close(breakdown.base_quantity_per_jar_g, base_g));

        let saffron = &breakdown.ingredients[1];
        assert!(close(saffron.quantity_per_jar, 250.0 * base_g / 1000.0));
        assert!(close(saffron.cost_per_jar, saffron.quantity_per_jar * 11.0));

        let base_cost = base_g * 6.0;
        let essential = 50.0 * base_g / 1000.0 * 8.0;
        let material = base_cost + saffron.cost_per_jar + essential;
        assert!(close(breakdown.material_per_jar, material));
        assert!(close(breakdown.total_cost_per_jar, material + 141.0 + 100.0));
        assert!(close(breakdown.total_output_g, 5000.0));
    }

    #[test]
    fn test_masses_sum_to_jar_size() {
        let mut inputs = CalculatorInputs::default();
        for jar in [10.0, 50.0, 123.4, 500.0] {
            inputs.jar_size_g = jar;
            let breakdown = inputs.compute().unwrap();
            assert!(close(breakdown.jar_mass_g(), jar), "jar = {jar}");
        }

        inputs.add_additive();
        inputs.ingredients.push(Ingredient::additive(
            "Beeswax",
            30.0,
            Unit::G,
            900.0,
            BulkUnit::Kg,
            1.0,
        ));
        inputs.jar_size_g = 75.0;
        let breakdown = inputs.compute().unwrap();
        assert!(close(breakdown.jar_mass_g(), 75.0));
    }

    #[test]
    fn test_margin_formula() {
        let breakdown = CalculatorInputs::default().compute().unwrap();
        for margin in [breakdown.mrp, breakdown.distributor] {
            let expected = (margin.price - breakdown.total_cost_per_jar) / margin.price;
            assert!(close(margin.margin, expected));
            assert!(close(margin.revenue, margin.price * 100.0));
            assert!(close(
                margin.batch_profit,
                margin.revenue - breakdown.total_batch_cost
            ));
        }
    }

    #[test]
    fn test_zero_price_margin_is_zero() {
        let inputs = CalculatorInputs {
            mrp: 0.0,
            ..CalculatorInputs::default()
        };
        let breakdown = inputs.compute().unwrap();
        assert_eq!(breakdown.mrp.margin, 0.0);
        assert!(!breakdown.mrp.is_profitable());
    }

    #[test]
    fn test_non_finite_inputs_become_zero() {
        let inputs = CalculatorInputs {
            box_cost: f64::NAN,
            jar_cost: f64::INFINITY,
            ..CalculatorInputs::default()
        };
        assert_eq!(inputs.packaging_per_jar(), 2.0);
        let breakdown = inputs.compute().unwrap();
        assert!(breakdown.total_batch_cost.is_finite());
    }

    #[test]
    fn test_zero_density_treated_as_one() {
        let mut inputs = CalculatorInputs::default();
        inputs.ingredients[2].density = 0.0;
        let breakdown = inputs.compute().unwrap();
        assert!(close(breakdown.base_quantity_per_jar_g, 50.0 / 1.3));
        assert!(close(breakdown.jar_mass_g(), 50.0));
    }

    #[test]
    fn test_no_base() {
        let mut inputs = CalculatorInputs::default();
        inputs.ingredients[0].role = IngredientRole::Additive;
        assert_eq!(inputs.compute(), Err(CalculatorError::NoBaseIngredient));
    }

    #[test]
    fn test_promote_demotes_previous_base() {
        let mut inputs = CalculatorInputs::default();
        inputs.promote_to_base(2).unwrap();
        let bases: Vec<_> = inputs.ingredients.iter().filter(|i| i.is_base()).collect();
        assert_eq!(bases.len(), 1);
        assert_eq!(bases[0].name, "Essential Oil");
        assert_eq!(
            inputs.promote_to_base(9),
            Err(CalculatorError::NoSuchIngredient(9))
        );
    }

    #[test]
    fn test_remove_rules() {
        let mut inputs = CalculatorInputs::default();
        assert_eq!(
            inputs.remove_ingredient(0),
            Err(CalculatorError::BaseNotRemovable)
        );
        assert_eq!(inputs.remove_ingredient(2).unwrap().name, "Essential Oil");
        assert_eq!(inputs.remove_ingredient(1).unwrap().name, "Saffron Oil");
        assert_eq!(inputs.ingredients.len(), 1);

        inputs.ingredients[0].role = IngredientRole::Additive;
        assert_eq!(
            inputs.remove_ingredient(0),
            Err(CalculatorError::LastIngredient)
        );
    }

    #[test]
    fn test_units_parse() {
        assert_eq!("ml".parse::<Unit>(), Ok(Unit::Ml));
        assert_eq!("L".parse::<BulkUnit>(), Ok(BulkUnit::L));
        assert!("oz".parse::<Unit>().is_err());
    }

    #[test]
    fn test_inputs_partial_json_uses_defaults() {
        let inputs: CalculatorInputs = serde_json::from_str(r#"{"num_jars": 10}"#).unwrap();
        assert_eq!(inputs.num_jars, 10);
        assert_eq!(inputs.mrp, 4999.0);
        assert_eq!(inputs.ingredients.len(), 3);
    }
}
