use std::fmt;

use serde::{Deserialize, Serialize};

/// Style class the chart card carries while selected.
pub const SELECTED_CLASS: &str = "kd-chart-card-selected";

const HELM_ICON: &str = "https://deis.com/assets/images/svg/helm-logo.svg";
const POSTGRES_ICON: &str = "https://lh3.googleusercontent.com/LbedQe3EHVrogFarNml-75q3xkHqx2MbkD-Tugu-BUOJWLR5iTwfyS7PtfzOt9IOOsMJ0j621RBR";
const WILDFLY_ICON: &str =
    "http://design.jboss.org/wildfly/logo/final/wildfly_logo_stacked_600px.png";

/// Chart repositories the deploy form offers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartRepository {
    #[default]
    #[serde(rename = "None")]
    None,
    #[serde(rename = "kubernetes-charts")]
    KubernetesCharts,
    #[serde(rename = "ammeon-charts")]
    AmmeonCharts,
}

impl ChartRepository {
    /// In the order the repository picker lists them.
    pub const ALL: [ChartRepository; 3] = [
        ChartRepository::None,
        ChartRepository::KubernetesCharts,
        ChartRepository::AmmeonCharts,
    ];

    /// Exact-match lookup. Anything unrecognised maps to `None`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "kubernetes-charts" => ChartRepository::KubernetesCharts,
            "ammeon-charts" => ChartRepository::AmmeonCharts,
            _ => ChartRepository::None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ChartRepository::None => "None",
            ChartRepository::KubernetesCharts => "kubernetes-charts",
            ChartRepository::AmmeonCharts => "ammeon-charts",
        }
    }

    /// Index location of the repository.
    pub fn url(self) -> Option<&'static str> {
        match self {
            ChartRepository::None => None,
            ChartRepository::KubernetesCharts => {
                Some("http://storage.googleapis.com/kubernetes-charts")
            }
            ChartRepository::AmmeonCharts => Some("http://172.19.29.166:8879/charts"),
        }
    }

    /// Fresh copy of the repository's chart list, nothing selected.
    pub fn charts(self) -> Vec<ChartCatalogEntry> {
        match self {
            ChartRepository::None => Vec::new(),
            ChartRepository::KubernetesCharts => vec![ChartCatalogEntry::new(
                POSTGRES_ICON,
                "PostgresSQL",
                "An postgresql sample database app",
            )],
            ChartRepository::AmmeonCharts => vec![
                ChartCatalogEntry::new(HELM_ICON, "Example App 1", "Example App with sample app"),
                ChartCatalogEntry::new(
                    POSTGRES_ICON,
                    "PostgresSQL",
                    "An postgresql sample database app",
                ),
                ChartCatalogEntry::new(WILDFLY_ICON, "Wildfly App 1", "Example App with Activemq"),
                ChartCatalogEntry::new(HELM_ICON, "Wildfly App 2", "Example App with Activemq"),
                ChartCatalogEntry::new(HELM_ICON, "Wildfly App 3", "Example App with Activemq"),
            ],
        }
    }
}

impl fmt::Display for ChartRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Repository as the picker lists it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartRepositoryInfo {
    pub name: ChartRepository,
    pub url: Option<&'static str>,
}

impl ChartRepositoryInfo {
    pub fn all() -> Vec<Self> {
        ChartRepository::ALL
            .into_iter()
            .map(|repo| Self {
                name: repo,
                url: repo.url(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartCatalogEntry {
    pub icon: String,
    pub name: String,
    pub description: String,
    /// `SELECTED_CLASS` or empty.
    #[serde(default)]
    pub selected: String,
}

impl ChartCatalogEntry {
    fn new(icon: &str, name: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            selected: String::new(),
        }
    }

    pub fn is_selected(&self) -> bool {
        self.selected == SELECTED_CLASS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(charts: &[ChartCatalogEntry]) -> Vec<&str> {
        charts.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn ammeon_catalog() {
        let charts = ChartRepository::AmmeonCharts.charts();
        assert_eq!(
            names(&charts),
            [
                "Example App 1",
                "PostgresSQL",
                "Wildfly App 1",
                "Wildfly App 2",
                "Wildfly App 3"
            ]
        );
        assert!(charts.iter().all(|c| !c.is_selected()));
    }

    #[test]
    fn kubernetes_catalog() {
        let charts = ChartRepository::KubernetesCharts.charts();
        assert_eq!(names(&charts), ["PostgresSQL"]);
    }

    #[test]
    fn unknown_names_map_to_none() {
        assert_eq!(ChartRepository::from_name("None"), ChartRepository::None);
        assert_eq!(ChartRepository::from_name("stable"), ChartRepository::None);
        assert_eq!(ChartRepository::from_name("Ammeon-Charts"), ChartRepository::None);
        assert!(ChartRepository::None.charts().is_empty());
    }

    #[test]
    fn picker_lists_repositories_with_index_urls() {
        assert_eq!(
            serde_json::to_value(ChartRepositoryInfo::all()).unwrap(),
            serde_json::json!([
                {"name": "None", "url": null},
                {"name": "kubernetes-charts", "url": "http://storage.googleapis.com/kubernetes-charts"},
                {"name": "ammeon-charts", "url": "http://172.19.29.166:8879/charts"},
            ])
        );
    }

    #[test]
    fn names_round_trip_through_lookup() {
        for repo in ChartRepository::ALL {
            assert_eq!(ChartRepository::from_name(repo.name()), repo);
        }
        assert_eq!(
            serde_json::to_string(&ChartRepository::AmmeonCharts).unwrap(),
            "\"ammeon-charts\""
        );
    }
}
