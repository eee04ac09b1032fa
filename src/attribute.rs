//! The movement-speed attribute and its modifiers.

use serde::{Deserialize, Serialize};

use crate::constants::{PLAYER_SPEED, SPRINTING_MODIFIER_ID, SPRINT_SPEED};

/// How a modifier combines with the attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierOperation {
    /// Added to the base before any multiplication.
    Add,
    /// Adds `base * amount` to the value.
    MultiplyBase,
    /// Multiplies the value by `1 + amount`.
    MultiplyTotal,
}

/// A single named modifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeModifier {
    /// Identifier; modifiers with equal ids replace each other.
    pub id: String,
    /// Modifier magnitude.
    pub amount: f64,
    /// Combination rule.
    pub operation: ModifierOperation,
}

/// An attribute base value with its active modifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeValue {
    /// Value before modifiers.
    pub base: f64,
    /// Active modifiers, in application order per operation.
    #[serde(default)]
    pub modifiers: Vec<AttributeModifier>,
}

impl Default for AttributeValue {
    fn default() -> Self {
        Self::new(f64::from(PLAYER_SPEED))
    }
}

impl AttributeValue {
    /// An attribute with no modifiers.
    #[must_use]
    pub const fn new(base: f64) -> Self {
        Self {
            base,
            modifiers: Vec::new(),
        }
    }

    /// Whether a modifier with `id` is present.
    #[must_use]
    pub fn has_modifier(&self, id: &str) -> bool {
        self.modifiers.iter().any(|m| m.id == id)
    }

    /// Return a copy with every modifier named `id` removed.
    #[must_use]
    pub fn without_modifier(mut self, id: &str) -> Self {
        self.modifiers.retain(|m| m.id != id);
        self
    }

    /// Return a copy with `modifier` appended, replacing any with the same id.
    #[must_use]
    pub fn with_modifier(self, modifier: AttributeModifier) -> Self {
        let mut out = self.without_modifier(&modifier.id);
        out.modifiers.push(modifier);
        out
    }

    /// Evaluate the attribute.
    ///
    /// Additions apply to the base first, then every multiply-base modifier
    /// adds a share of that sum, then multiply-total modifiers scale the
    /// running value.
    ///
    /// # Examples
    /// ```
    /// use blockmotion::attribute::{AttributeModifier, AttributeValue, ModifierOperation};
    /// let speed = AttributeValue::new(0.1).with_modifier(AttributeModifier {
    ///     id: "potion".to_owned(),
    ///     amount: 0.2,
    ///     operation: ModifierOperation::MultiplyBase,
    /// });
    /// assert!((speed.value() - 0.12).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn value(&self) -> f64 {
        let base = self
            .modifiers_with(ModifierOperation::Add)
            .fold(self.base, |acc, m| acc + m.amount);
        let scaled = self
            .modifiers_with(ModifierOperation::MultiplyBase)
            .fold(base, |acc, m| acc + base * m.amount);
        self.modifiers_with(ModifierOperation::MultiplyTotal)
            .fold(scaled, |acc, m| acc * (1.0 + m.amount))
    }

    fn modifiers_with(
        &self,
        operation: ModifierOperation,
    ) -> impl Iterator<Item = &AttributeModifier> {
        self.modifiers
            .iter()
            .filter(move |m| m.operation == operation)
    }
}

/// The modifier the client applies while sprinting.
#[must_use]
pub fn sprint_modifier() -> AttributeModifier {
    AttributeModifier {
        id: SPRINTING_MODIFIER_ID.to_owned(),
        amount: SPRINT_SPEED,
        operation: ModifierOperation::MultiplyTotal,
    }
}

/// Movement speed for this tick.
///
/// Any sprint modifier the caller supplied is dropped and re-added only when
/// the actor is actually sprinting this tick.
#[must_use]
pub fn movement_speed(supplied: Option<&AttributeValue>, sprinting: bool) -> f64 {
    let attribute = supplied
        .cloned()
        .unwrap_or_default()
        .without_modifier(SPRINTING_MODIFIER_ID);
    if sprinting {
        attribute.with_modifier(sprint_modifier()).value()
    } else {
        attribute.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_speed_is_base_player_speed() {
        assert_eq!(movement_speed(None, false), f64::from(PLAYER_SPEED));
    }

    #[test]
    fn sprinting_multiplies_total() {
        let expected = f64::from(PLAYER_SPEED) * (1.0 + SPRINT_SPEED);
        assert_eq!(movement_speed(None, true), expected);
    }

    #[test]
    fn stale_sprint_modifier_is_removed() {
        let supplied = AttributeValue::default().with_modifier(sprint_modifier());
        assert!(supplied.has_modifier(SPRINTING_MODIFIER_ID));
        assert_eq!(movement_speed(Some(&supplied), false), f64::from(PLAYER_SPEED));
    }

    #[test]
    fn operations_apply_in_order() {
        let attribute = AttributeValue::new(1.0)
            .with_modifier(AttributeModifier {
                id: "total".to_owned(),
                amount: 1.0,
                operation: ModifierOperation::MultiplyTotal,
            })
            .with_modifier(AttributeModifier {
                id: "add".to_owned(),
                amount: 1.0,
                operation: ModifierOperation::Add,
            })
            .with_modifier(AttributeModifier {
                id: "base".to_owned(),
                amount: 0.5,
                operation: ModifierOperation::MultiplyBase,
            });
        // (1 + 1) = 2; 2 + 2 * 0.5 = 3; 3 * 2 = 6
        assert_eq!(attribute.value(), 6.0);
    }
}
