//! Session: the mutable state of one form — field values, prompt values and
//! the selected product. An explicit context object with an init/teardown
//! lifecycle; rendering never mutates it.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::catalog::{self, FieldGroups, PROMPT_FIELDS};
use crate::compose;
use crate::error::Error;

#[derive(Debug)]
pub struct Session {
    product: &'static str,
    groups: &'static FieldGroups,
    values: HashMap<String, String>,
    prompts: HashMap<String, String>,
}

/// Serializable copy of the session, baked into exported documents.
/// BTreeMaps keep the output deterministic.
#[derive(Debug, Serialize)]
pub struct SessionState {
    pub product: String,
    pub fields: BTreeMap<String, String>,
    pub prompts: BTreeMap<String, String>,
}

impl Session {
    /// Create a session for the given product. Every active field key is
    /// seeded with its descriptor default (or empty string), every prompt
    /// key with its default, and the composed prompts are populated.
    /// Seeding happens here and in switch_product only — never as a render
    /// side effect.
    pub fn new(product: &str) -> Result<Self, Error> {
        let (product, groups) = catalog::lookup(product)?;
        let mut session = Session {
            product,
            groups,
            values: HashMap::new(),
            prompts: HashMap::new(),
        };
        session.seed_fields();
        session.seed_prompts();
        session.recompose();
        Ok(session)
    }

    /// Session for the startup default product.
    pub fn default_product() -> Self {
        // The default product is a row of the static table; lookup cannot fail.
        Self::new(catalog::DEFAULT_PRODUCT).unwrap_or_else(|_| unreachable!())
    }

    pub fn product(&self) -> &'static str {
        self.product
    }

    pub fn groups(&self) -> &'static FieldGroups {
        self.groups
    }

    /// Current value of a field, empty string when absent.
    pub fn field(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    /// Current text of a prompt block, empty string when absent.
    pub fn prompt(&self, key: &str) -> &str {
        self.prompts.get(key).map(String::as_str).unwrap_or("")
    }

    /// Store a field edit and recompose the affected prompts. Last write
    /// wins; keys outside the active field set are stored verbatim and stay
    /// invisible until a product exposes them.
    pub fn set_field(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.recompose();
    }

    /// Switch the active product: validate, swap the descriptor lists, prune
    /// field keys the new product does not declare, seed missing keys, and
    /// recompose. Values for keys shared by name across products survive
    /// unchanged. On an unknown id the session is left wholly untouched.
    pub fn switch_product(&mut self, product: &str) -> Result<(), Error> {
        let (product, groups) = catalog::lookup(product)?;
        self.product = product;
        self.groups = groups;
        self.values.retain(|key, _| groups.contains_key(key));
        self.seed_fields();
        self.recompose();
        Ok(())
    }

    /// Serializable copy of the current state.
    pub fn state(&self) -> SessionState {
        SessionState {
            product: self.product.to_string(),
            fields: self.values.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            prompts: self.prompts.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        }
    }

    fn seed_fields(&mut self) {
        for d in self.groups.iter_all() {
            self.values
                .entry(d.key.to_string())
                .or_insert_with(|| d.default.unwrap_or("").to_string());
        }
    }

    fn seed_prompts(&mut self) {
        for d in PROMPT_FIELDS {
            self.prompts
                .entry(d.key.to_string())
                .or_insert_with(|| d.default.unwrap_or("").to_string());
        }
    }

    /// Rewrite the composed prompt blocks from the current field values.
    /// Runs on every field edit and every product switch.
    fn recompose(&mut self) {
        self.prompts.insert(
            "partA".to_string(),
            compose::overview(self.product, self.groups, &self.values),
        );
        self.prompts.insert(
            "partB".to_string(),
            compose::funding_options(self.groups, &self.values),
        );
        self.prompts.insert(
            "partC".to_string(),
            compose::funding_situation(self.groups, &self.values),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_seeded_at_init() {
        let session = Session::default_product();
        assert_eq!(session.product(), "RCN");
        assert_eq!(session.field("currency"), "GBP");
        assert_eq!(session.field("askYieldToWorst"), "6.2");
        // No default configured: seeded as empty string
        assert_eq!(session.field("currentLombardLoanExposure"), "");
        assert_eq!(session.prompt("introduction"), "this is the intro");
        assert_eq!(session.prompt("partD"), "this is part d");
    }

    #[test]
    fn test_edit_recomposes_immediately() {
        let mut session = Session::default_product();
        session.set_field("askPrice", "99.5");
        assert!(session.prompt("partA").contains("Ask Price: 99.5"));
        assert!(!session.prompt("partA").contains("108.714"));
    }

    #[test]
    fn test_out_of_set_key_is_stored_but_invisible() {
        let mut session = Session::default_product();
        session.set_field("notAField", "whatever");
        assert_eq!(session.field("notAField"), "whatever");
        assert!(!session.prompt("partA").contains("whatever"));
    }

    #[test]
    fn test_switch_prunes_and_retains() {
        let mut session = Session::default_product();
        session.set_field("askPrice", "99.5");
        session.switch_product("Bond").unwrap();

        // Shared key keeps the edited value
        assert_eq!(session.field("askPrice"), "99.5");
        // Shared key keeps its RCN-seeded value even though Bond has no default
        assert_eq!(session.field("spotRate"), "1.3600");
        // RCN-only keys are pruned
        assert_eq!(session.field("underlyingAsset"), "");
        assert!(!session.values.contains_key("underlyingAsset"));
    }

    #[test]
    fn test_switch_back_reseeds_defaults() {
        let mut session = Session::default_product();
        session.switch_product("Bond").unwrap();
        session.switch_product("RCN").unwrap();
        assert_eq!(session.field("underlyingAsset"), "Vodafone Group PLC Bond");
    }

    #[test]
    fn test_unknown_product_leaves_state_unchanged() {
        let mut session = Session::default_product();
        session.set_field("askPrice", "99.5");
        let before = serde_json::to_string(&session.state()).unwrap();

        let err = session.switch_product("Equity").unwrap_err();
        assert_eq!(err, Error::UnknownProduct("Equity".into()));

        let after = serde_json::to_string(&session.state()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_prompts_survive_switch() {
        let mut session = Session::default_product();
        session.switch_product("Bond").unwrap();
        // Prompt keys are product-independent; non-composed ones persist
        assert_eq!(session.prompt("partE"), "this is part e");
        // Composed ones now reflect the Bond field set
        assert!(session.prompt("partA").contains("Product: Bond"));
        assert!(!session.prompt("partA").contains("Underlying Asset"));
    }
}
