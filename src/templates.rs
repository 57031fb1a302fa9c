// ABOUTME: Template catalog for the carousel-slides application
// ABOUTME: Fixed list of named color palettes, queryable by id and category

use crate::errors::CarouselError;
use crate::style::{Color, ColorPair, StylePalette};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Catalog grouping for templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Professional,
    Creative,
    Minimal,
    Bold,
}

impl TemplateCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateCategory::Professional => "professional",
            TemplateCategory::Creative => "creative",
            TemplateCategory::Minimal => "minimal",
            TemplateCategory::Bold => "bold",
        }
    }
}

impl FromStr for TemplateCategory {
    type Err = CarouselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "professional" => Ok(TemplateCategory::Professional),
            "creative" => Ok(TemplateCategory::Creative),
            "minimal" => Ok(TemplateCategory::Minimal),
            "bold" => Ok(TemplateCategory::Bold),
            other => Err(CarouselError::ValidationError(format!(
                "Unknown template category: {}",
                other
            ))),
        }
    }
}

/// An immutable catalog entry pairing a named look with a full palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub category: TemplateCategory,
    pub description: String,
    pub colors: StylePalette,
}

const fn pair(from: u32, to: u32) -> ColorPair {
    ColorPair::new(
        Color::rgb((from >> 16) as u8, (from >> 8) as u8, from as u8),
        Color::rgb((to >> 16) as u8, (to >> 8) as u8, to as u8),
    )
}

const fn text(value: u32) -> Color {
    Color::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

struct TemplateDef {
    id: &'static str,
    name: &'static str,
    category: TemplateCategory,
    description: &'static str,
    colors: StylePalette,
}

const CATALOG: &[TemplateDef] = &[
    TemplateDef {
        id: "corporate-blue",
        name: "Corporate Blue",
        category: TemplateCategory::Professional,
        description: "Clean and professional with blue tones",
        colors: StylePalette {
            title: pair(0x1d4ed8, 0x1e3a8a),
            content: pair(0x475569, 0x1e293b),
            cta: pair(0x2563eb, 0x4338ca),
            text: text(0xffffff),
        },
    },
    TemplateDef {
        id: "executive-gray",
        name: "Executive Gray",
        category: TemplateCategory::Professional,
        description: "Sophisticated grayscale palette",
        colors: StylePalette {
            title: pair(0x374151, 0x111827),
            content: pair(0x6b7280, 0x374151),
            cta: pair(0x1f2937, 0x000000),
            text: text(0xffffff),
        },
    },
    TemplateDef {
        id: "business-green",
        name: "Business Green",
        category: TemplateCategory::Professional,
        description: "Trust-inspiring green tones",
        colors: StylePalette {
            title: pair(0x059669, 0x0f766e),
            content: pair(0x475569, 0x1e293b),
            cta: pair(0x10b981, 0x15803d),
            text: text(0xffffff),
        },
    },
    TemplateDef {
        id: "sunset-gradient",
        name: "Sunset Gradient",
        category: TemplateCategory::Creative,
        description: "Warm orange to pink gradient",
        colors: StylePalette {
            title: pair(0xf97316, 0xdb2777),
            content: pair(0xfb7185, 0xf97316),
            cta: pair(0xef4444, 0xdb2777),
            text: text(0xffffff),
        },
    },
    TemplateDef {
        id: "ocean-breeze",
        name: "Ocean Breeze",
        category: TemplateCategory::Creative,
        description: "Refreshing cyan to blue tones",
        colors: StylePalette {
            title: pair(0x22d3ee, 0x3b82f6),
            content: pair(0x38bdf8, 0x2563eb),
            cta: pair(0x2dd4bf, 0x06b6d4),
            text: text(0xffffff),
        },
    },
    TemplateDef {
        id: "aurora",
        name: "Aurora",
        category: TemplateCategory::Creative,
        description: "Magical purple to teal gradient",
        colors: StylePalette {
            title: pair(0x9333ea, 0x2563eb),
            content: pair(0x8b5cf6, 0x7c3aed),
            cta: pair(0xd946ef, 0x9333ea),
            text: text(0xffffff),
        },
    },
    TemplateDef {
        id: "clean-white",
        name: "Clean White",
        category: TemplateCategory::Minimal,
        description: "Simple white backgrounds with subtle accents",
        colors: StylePalette {
            title: pair(0xf4f4f5, 0xe4e4e7),
            content: pair(0xfafafa, 0xf4f4f5),
            cta: pair(0xe4e4e7, 0xd4d4d8),
            text: text(0x18181b),
        },
    },
    TemplateDef {
        id: "soft-beige",
        name: "Soft Beige",
        category: TemplateCategory::Minimal,
        description: "Warm neutral tones",
        colors: StylePalette {
            title: pair(0xfffbeb, 0xffedd5),
            content: pair(0xf5f5f4, 0xe7e5e4),
            cta: pair(0xfef3c7, 0xfde68a),
            text: text(0x292524),
        },
    },
    TemplateDef {
        id: "light-slate",
        name: "Light Slate",
        category: TemplateCategory::Minimal,
        description: "Cool gray minimal design",
        colors: StylePalette {
            title: pair(0xe2e8f0, 0xcbd5e1),
            content: pair(0xf1f5f9, 0xe2e8f0),
            cta: pair(0xcbd5e1, 0x94a3b8),
            text: text(0x0f172a),
        },
    },
    TemplateDef {
        id: "neon-pink",
        name: "Neon Pink",
        category: TemplateCategory::Bold,
        description: "Eye-catching hot pink gradient",
        colors: StylePalette {
            title: pair(0xec4899, 0xe11d48),
            content: pair(0xc026d3, 0xbe185d),
            cta: pair(0xdb2777, 0xdc2626),
            text: text(0xffffff),
        },
    },
    TemplateDef {
        id: "electric-purple",
        name: "Electric Purple",
        category: TemplateCategory::Bold,
        description: "Vibrant purple energy",
        colors: StylePalette {
            title: pair(0x7c3aed, 0x6b21a8),
            content: pair(0x9333ea, 0x5b21b6),
            cta: pair(0xc026d3, 0x6d28d9),
            text: text(0xffffff),
        },
    },
    TemplateDef {
        id: "dark-mode",
        name: "Dark Mode",
        category: TemplateCategory::Bold,
        description: "Sleek dark theme with accent colors",
        colors: StylePalette {
            title: pair(0x27272a, 0x09090b),
            content: pair(0x18181b, 0x000000),
            cta: pair(0x4f46e5, 0x6d28d9),
            text: text(0xffffff),
        },
    },
];

impl From<&TemplateDef> for Template {
    fn from(def: &TemplateDef) -> Self {
        Template {
            id: def.id.to_string(),
            name: def.name.to_string(),
            category: def.category,
            description: def.description.to_string(),
            colors: def.colors,
        }
    }
}

/// All templates in catalog order.
pub fn all() -> Vec<Template> {
    CATALOG.iter().map(Template::from).collect()
}

/// Look up a template by id.
pub fn find(id: &str) -> Option<Template> {
    CATALOG.iter().find(|t| t.id == id).map(Template::from)
}

/// Templates in the given category.
pub fn by_category(category: TemplateCategory) -> Vec<Template> {
    CATALOG
        .iter()
        .filter(|t| t.category == category)
        .map(Template::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_twelve_templates() {
        assert_eq!(all().len(), 12);
        for category in [
            TemplateCategory::Professional,
            TemplateCategory::Creative,
            TemplateCategory::Minimal,
            TemplateCategory::Bold,
        ] {
            assert_eq!(by_category(category).len(), 3, "{:?}", category);
        }
    }

    #[test]
    fn test_find_by_id() {
        let t = find("sunset-gradient").unwrap();
        assert_eq!(t.name, "Sunset Gradient");
        assert_eq!(t.colors.title.from.to_string(), "#f97316");
        assert_eq!(t.colors.title.to.to_string(), "#db2777");
        assert!(find("does-not-exist").is_none());
    }

    #[test]
    fn test_minimal_templates_use_dark_text() {
        let t = find("clean-white").unwrap();
        assert_eq!(t.colors.text.to_string(), "#18181b");
    }

    #[test]
    fn test_ids_are_unique() {
        let mut ids: Vec<_> = all().into_iter().map(|t| t.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 12);
    }
}
