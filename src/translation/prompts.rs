// Extraction prompt templates
// Author: kelexine (https://github.com/kelexine)

use serde::{Deserialize, Serialize};

/// Versioned extraction schema sent when the caller supplies no prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptTemplate {
    /// Flat items with a single price.
    MenuV1,
    /// Adds item numbers and priced variants.
    MenuV2,
}

impl PromptTemplate {
    pub fn text(self) -> &'static str {
        match self {
            PromptTemplate::MenuV1 => MENU_V1,
            PromptTemplate::MenuV2 => MENU_V2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PromptTemplate::MenuV1 => "menu_v1",
            PromptTemplate::MenuV2 => "menu_v2",
        }
    }
}

const MENU_V1: &str = r#"Analyze this restaurant menu PDF and extract all information into a structured JSON format.

CRITICAL: Return ONLY valid JSON. No markdown, no code blocks, no explanations. Start with { and end with }.

Use this EXACT structure:
{
  "restaurant": {
    "name": "Restaurant Name",
    "address": "Full Address",
    "phone": "+49 123 456789",
    "email": "email@example.com",
    "description": "Brief description",
    "cuisine_type": "Italian",
    "delivers": true,
    "opening_hours": {"monday": "11:00-22:00"},
    "payment_methods": ["Cash", "Card"]
  },
  "categories": [
    {
      "name": "Category Name",
      "display_order": 0,
      "items": [
        {
          "name": "Item Name",
          "price": 9.99,
          "description": "Description"
        }
      ]
    }
  ]
}

Rules:
- All prices as numbers (9.99 not "9,99 €")
- If an item is offered in several sizes, list each size as its own item
- Omit fields if not found (except required ones)
- Return ONLY the JSON object, nothing else"#;

const MENU_V2: &str = r#"Analyze this restaurant menu PDF and extract all information into a structured JSON format.

CRITICAL: Return ONLY valid JSON. No markdown, no code blocks, no explanations. Start with { and end with }.

Use this EXACT structure:
{
  "restaurant": {
    "name": "Restaurant Name",
    "address": "Full Address",
    "phone": "+49 123 456789",
    "email": "email@example.com",
    "description": "Brief description",
    "cuisine_type": "Italian",
    "delivers": true,
    "opening_hours": {"monday": "11:00-22:00"},
    "payment_methods": ["Cash", "Card"]
  },
  "categories": [
    {
      "name": "Category Name",
      "display_order": 0,
      "items": [
        {
          "name": "Item Name",
          "item_number": "1",
          "price": 9.99,
          "description": "Description",
          "has_variants": false
        },
        {
          "name": "Item with number",
          "item_number": "2a",
          "price": 12.50,
          "description": "Description",
          "has_variants": false
        },
        {
          "name": "Item with variants",
          "item_number": "3",
          "description": "Description",
          "has_variants": true,
          "variants": [
            {"name": "Small", "price": 7.50, "display_order": 0},
            {"name": "Large", "price": 9.50, "display_order": 1}
          ]
        }
      ]
    }
  ]
}

Rules:
- IMPORTANT: If menu items have numbers (like "1", "2", "3a", "12b"), extract them as "item_number"
- Look for numbered lists or item identifiers anywhere on the menu
- Item numbers can be numeric ("1", "10") or alphanumeric ("1a", "2b", "3c")
- All prices as numbers (9.99 not "9,99 €")
- If item has variants, omit "price" field and set "has_variants": true
- If item has no variants, include "price" and set "has_variants": false
- Omit fields if not found (except required ones)
- Return ONLY the JSON object, nothing else"#;
