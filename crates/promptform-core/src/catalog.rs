//! Static field and prompt catalogs.
//!
//! Products are rows in PRODUCTS; each row carries three ordered descriptor
//! lists. To add a product, add a row here — the renderer, composer and
//! switcher adapt automatically. Prompt descriptors are global, not
//! product-scoped.

use crate::error::Error;

/// Static metadata for one editable assumption field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub label: &'static str,
    pub key: &'static str,
    /// Presentation hint for the input control. Free text, not validated.
    pub kind: &'static str,
    pub default: Option<&'static str>,
}

/// Static metadata for one narrative output section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptDescriptor {
    pub label: &'static str,
    pub key: &'static str,
    pub default: Option<&'static str>,
}

/// The three ordered field groups of one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldGroups {
    pub product_info: &'static [FieldDescriptor],
    pub funding_options: &'static [FieldDescriptor],
    pub funding_situation: &'static [FieldDescriptor],
}

impl FieldGroups {
    /// Iterate every descriptor in group order: product info, funding
    /// options, funding situation.
    pub fn iter_all(&self) -> impl Iterator<Item = &'static FieldDescriptor> {
        self.product_info
            .iter()
            .chain(self.funding_options.iter())
            .chain(self.funding_situation.iter())
    }

    /// Whether any group declares the given field key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.iter_all().any(|d| d.key == key)
    }
}

const fn text_field(
    label: &'static str,
    key: &'static str,
    default: Option<&'static str>,
) -> FieldDescriptor {
    FieldDescriptor { label, key, kind: "text", default }
}

const RCN_PRODUCT_INFO: &[FieldDescriptor] = &[
    text_field("Underlying Asset", "underlyingAsset", Some("Vodafone Group PLC Bond")),
    text_field("Currency", "currency", Some("GBP")),
    text_field("Face Value", "faceValue", Some("10,000,000")),
    text_field("Ask Price", "askPrice", Some("108.714")),
    text_field("Coupon Rate (p.a.)", "couponRate", Some("8.00%")),
    text_field("Next Call Date", "nextCallDate", Some("30/05/2031")),
    text_field("Call Price", "callPrice", Some("100.00")),
    text_field("Ask Yield to Worst (YTW)", "askYieldToWorst", Some("6.2")),
];

const RCN_FUNDING_OPTIONS: &[FieldDescriptor] = &[
    text_field("Funding Currency", "fundingCurrency", Some("USD")),
    text_field("Spot Rate", "spotRate", Some("1.3600")),
    text_field("Lombard Loan Interest Rate (p.a.)", "lombardLoanInterestRate", Some("5%")),
    text_field("Investment Lending Value", "investmentLendingValue", Some("75%")),
];

const RCN_FUNDING_SITUATION: &[FieldDescriptor] = &[
    text_field("Available Cash Liquidity", "availableCashLiquidity", Some("USD 5,000,000")),
    text_field("Total Approved Credit Limit", "totalApprovedCreditLimit", Some("USD 25,000,000")),
    text_field("Current Lombard Loan Exposure", "currentLombardLoanExposure", None),
];

const BOND_PRODUCT_INFO: &[FieldDescriptor] = &[
    text_field("Ask Price", "askPrice", None),
    text_field("Next Call Date", "nextCallDate", None),
    text_field("Call Price", "callPrice", None),
    text_field("Ask Yield to Worst", "askYieldToWorst", None),
];

const BOND_FUNDING_OPTIONS: &[FieldDescriptor] = &[
    text_field("Funding Currency", "fundingCurrency", Some("USD")),
    text_field("Spot Rate", "spotRate", None),
    text_field("Lombard Loan Interest Rate (p.a.)", "lombardLoanInterestRate", Some("5%")),
    text_field("Investment Lending Value", "investmentLendingValue", None),
];

const BOND_FUNDING_SITUATION: &[FieldDescriptor] = &[
    text_field("Available Cash Liquidity", "availableCashLiquidity", None),
    text_field("Total Approved Credit Limit", "totalApprovedCreditLimit", None),
    text_field("Current Lombard Loan Exposure", "currentLombardLoanExposure", None),
];

/// Product table. The first row is the startup default.
const PRODUCTS: &[(&str, FieldGroups)] = &[
    (
        "RCN",
        FieldGroups {
            product_info: RCN_PRODUCT_INFO,
            funding_options: RCN_FUNDING_OPTIONS,
            funding_situation: RCN_FUNDING_SITUATION,
        },
    ),
    (
        "Bond",
        FieldGroups {
            product_info: BOND_PRODUCT_INFO,
            funding_options: BOND_FUNDING_OPTIONS,
            funding_situation: BOND_FUNDING_SITUATION,
        },
    ),
];

/// Product selected at startup.
pub const DEFAULT_PRODUCT: &str = PRODUCTS[0].0;

/// Narrative sections, in display order. partA/partB/partC are overwritten
/// by the composer on every edit; the others keep their defaults until a
/// future feature writes to them.
pub const PROMPT_FIELDS: &[PromptDescriptor] = &[
    PromptDescriptor { label: "Introduction", key: "introduction", default: Some("this is the intro") },
    PromptDescriptor { label: "Part A: Pre-Calculation & Analysis", key: "partA", default: None },
    PromptDescriptor { label: "Part B: The Funding Options", key: "partB", default: None },
    PromptDescriptor { label: "Part C: Scenario Analysis", key: "partC", default: None },
    PromptDescriptor { label: "Part D: FX Sensitivity Analysis", key: "partD", default: Some("this is part d") },
    PromptDescriptor { label: "Part E: Full Narrative Generation", key: "partE", default: Some("this is part e") },
];

/// Known product identifiers, in declaration order.
pub fn product_ids() -> impl Iterator<Item = &'static str> {
    PRODUCTS.iter().map(|(id, _)| *id)
}

/// Resolve a product id to its canonical static id and field groups.
pub fn lookup(product: &str) -> Result<(&'static str, &'static FieldGroups), Error> {
    PRODUCTS
        .iter()
        .find(|(id, _)| *id == product)
        .map(|(id, groups)| (*id, groups))
        .ok_or_else(|| Error::UnknownProduct(product.to_string()))
}

/// The three field groups configured for a product.
pub fn groups(product: &str) -> Result<&'static FieldGroups, Error> {
    lookup(product).map(|(_, g)| g)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_products() {
        let ids: Vec<&str> = product_ids().collect();
        assert_eq!(ids, vec!["RCN", "Bond"]);
        assert_eq!(DEFAULT_PRODUCT, "RCN");
    }

    #[test]
    fn test_rcn_descriptors() {
        let g = groups("RCN").unwrap();
        assert_eq!(g.product_info.len(), 8);
        assert_eq!(g.funding_options.len(), 4);
        assert_eq!(g.funding_situation.len(), 3);
        assert_eq!(g.product_info[0].label, "Underlying Asset");
        assert_eq!(g.product_info[0].default, Some("Vodafone Group PLC Bond"));
        assert_eq!(g.product_info[7].default, Some("6.2"));
        assert_eq!(g.funding_situation[2].default, None);
    }

    #[test]
    fn test_bond_descriptors() {
        let g = groups("Bond").unwrap();
        assert_eq!(g.product_info.len(), 4);
        assert_eq!(g.product_info[3].label, "Ask Yield to Worst");
        assert!(!g.contains_key("underlyingAsset"));
        assert!(g.contains_key("askPrice"));
    }

    #[test]
    fn test_unknown_product() {
        let err = groups("Equity").unwrap_err();
        assert_eq!(err, Error::UnknownProduct("Equity".into()));
    }

    #[test]
    fn test_prompt_fields() {
        assert_eq!(PROMPT_FIELDS.len(), 6);
        assert_eq!(PROMPT_FIELDS[0].default, Some("this is the intro"));
        assert_eq!(PROMPT_FIELDS[1].key, "partA");
        assert_eq!(PROMPT_FIELDS[1].default, None);
    }
}
