use crate::repository_insights::domain::RepositorySnapshot;
use serde::Serialize;
use std::collections::HashMap;

/// Share of one language across all repositories of a scan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageShare {
    pub language: String,
    pub bytes: f64,
    /// Percentage of all bytes, rounded to one decimal
    pub percentage: f64,
}

/// LanguageBreakdown service aggregating per-repository language statistics
pub struct LanguageBreakdown;

impl LanguageBreakdown {
    /// Sums bytes per language; sorted by bytes descending, then by name
    pub fn compute<'a>(
        repositories: impl IntoIterator<Item = &'a RepositorySnapshot>,
    ) -> Vec<LanguageShare> {
        let mut totals: HashMap<&str, f64> = HashMap::new();
        for repository in repositories {
            for (language, bytes) in &repository.stats.languages {
                if bytes.is_finite() && *bytes > 0.0 {
                    *totals.entry(language.as_str()).or_insert(0.0) += bytes;
                }
            }
        }

        let grand_total: f64 = totals.values().sum();
        if grand_total <= 0.0 {
            return Vec::new();
        }

        let mut shares: Vec<LanguageShare> = totals
            .into_iter()
            .map(|(language, bytes)| LanguageShare {
                language: language.to_string(),
                bytes,
                percentage: (bytes / grand_total * 1000.0).round() / 10.0,
            })
            .collect();

        shares.sort_by(|a, b| {
            b.bytes
                .total_cmp(&a.bytes)
                .then_with(|| a.language.cmp(&b.language))
        });
        shares
    }
}
