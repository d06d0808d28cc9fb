//! Embedded neighborhood reference dataset.
//!
//! The upstream export stores every numeric quantity as text, so the DTO
//! layer keeps `Option<String>` fields and parses defensively: empty,
//! missing or garbage values become 0, and coordinates only survive when
//! both halves parse.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::domain::{
    Amenities, Coordinates, IndicatorScores, Neighborhood, PriceBand,
};
use crate::util::assets;

/// Read-only lookup table over the embedded records, sorted by name.
#[derive(Debug, Default)]
pub struct NeighborhoodCatalog {
    entries: Vec<Neighborhood>,
}

impl NeighborhoodCatalog {
    fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let records: Vec<NeighborhoodDto> = serde_json::from_str(raw)?;
        let mut entries: Vec<Neighborhood> =
            records.into_iter().map(Neighborhood::from).collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(Self { entries })
    }

    /// Exact-match lookup on the trimmed name. A miss is a normal outcome;
    /// dataset coverage is partial.
    pub fn find(&self, name: &str) -> Option<&Neighborhood> {
        let needle = name.trim();
        self.entries.iter().find(|hood| hood.name == needle)
    }

    /// Resolves free-form user input to the canonical record name, the way
    /// the picker does before calling [`find`](Self::find).
    pub fn resolve_name(&self, query: &str) -> Option<&str> {
        let needle = query.trim();
        self.entries
            .iter()
            .find(|hood| hood.name.eq_ignore_ascii_case(needle))
            .map(|hood| hood.name.as_str())
    }

    /// All record names, sorted, for the picker datalist.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|hood| hood.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Neighborhood> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The process-wide catalog, parsed once from the embedded asset. A parse
/// failure logs and yields an empty catalog; every lookup then reports
/// "no data" instead of tearing the app down.
pub fn catalog() -> &'static NeighborhoodCatalog {
    static CATALOG: OnceLock<NeighborhoodCatalog> = OnceLock::new();
    CATALOG.get_or_init(|| match NeighborhoodCatalog::from_json(assets::neighborhood_data()) {
        Ok(catalog) => {
            log::info!("loaded {} neighborhood records", catalog.len());
            catalog
        }
        Err(err) => {
            log::error!("failed to parse embedded neighborhood dataset: {err}");
            NeighborhoodCatalog::default()
        }
    })
}

#[derive(Debug, Deserialize)]
struct NeighborhoodDto {
    bairro: String,
    #[serde(default)]
    regional: Option<String>,
    #[serde(default)]
    preco_min_fipe_m2: Option<String>,
    #[serde(default)]
    preco_medio_fipe_m2: Option<String>,
    #[serde(default)]
    preco_max_fipe_m2: Option<String>,
    #[serde(default)]
    preco_medio_olx_m2: Option<String>,
    #[serde(default)]
    ibeu: Option<String>,
    #[serde(default)]
    idh: Option<String>,
    #[serde(default)]
    indice_ambiental: Option<String>,
    #[serde(default)]
    indice_moradia: Option<String>,
    #[serde(default)]
    renda_media_domiciliar: Option<String>,
    #[serde(default)]
    descricao: Option<String>,
    #[serde(default)]
    paradas_onibus: Option<String>,
    #[serde(default)]
    estacoes_bicicletar: Option<String>,
    #[serde(default)]
    km_ciclovias: Option<String>,
    #[serde(default)]
    escolas: Option<String>,
    #[serde(default)]
    unidades_saude: Option<String>,
    #[serde(default)]
    pracas: Option<String>,
    #[serde(default)]
    wifi_publico: Option<String>,
    #[serde(default)]
    latitude: Option<String>,
    #[serde(default)]
    longitude: Option<String>,
}

impl From<NeighborhoodDto> for Neighborhood {
    fn from(dto: NeighborhoodDto) -> Self {
        let coordinates = match (
            parse_coordinate(dto.latitude.as_deref()),
            parse_coordinate(dto.longitude.as_deref()),
        ) {
            (Some(latitude), Some(longitude)) => Some(Coordinates {
                latitude,
                longitude,
            }),
            _ => None,
        };

        Self {
            name: dto.bairro.trim().to_string(),
            region: dto
                .regional
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| "Unknown".to_string()),
            band: PriceBand {
                min_m2: parse_decimal(dto.preco_min_fipe_m2.as_deref()),
                avg_m2: parse_decimal(dto.preco_medio_fipe_m2.as_deref()),
                max_m2: parse_decimal(dto.preco_max_fipe_m2.as_deref()),
            },
            olx_avg_m2: parse_decimal(dto.preco_medio_olx_m2.as_deref()),
            indicators: IndicatorScores {
                wellbeing: parse_decimal(dto.ibeu.as_deref()),
                human_development: parse_decimal(dto.idh.as_deref()),
                environment: parse_decimal(dto.indice_ambiental.as_deref()),
                housing: parse_decimal(dto.indice_moradia.as_deref()),
            },
            avg_household_income: parse_decimal(dto.renda_media_domiciliar.as_deref()),
            description: dto.descricao.unwrap_or_default(),
            amenities: Amenities {
                bus_stops: parse_count(dto.paradas_onibus.as_deref()),
                bike_stations: parse_count(dto.estacoes_bicicletar.as_deref()),
                bike_lane_km: parse_decimal(dto.km_ciclovias.as_deref()),
                schools: parse_count(dto.escolas.as_deref()),
                health_units: parse_count(dto.unidades_saude.as_deref()),
                squares: parse_count(dto.pracas.as_deref()),
                public_wifi: parse_flag(dto.wifi_publico.as_deref()),
            },
            coordinates,
        }
    }
}

/// Upstream decimals may use a comma separator; anything unparsable is 0.
fn parse_decimal(raw: Option<&str>) -> f64 {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.replace(',', ".").parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

fn parse_count(raw: Option<&str>) -> u32 {
    raw.map(str::trim)
        .and_then(|value| value.parse::<u32>().ok())
        .unwrap_or(0)
}

fn parse_flag(raw: Option<&str>) -> bool {
    matches!(
        raw.map(str::trim).map(str::to_ascii_lowercase).as_deref(),
        Some("sim") | Some("true") | Some("1")
    )
}

/// Coordinates are the one field where 0 is not a usable fallback.
fn parse_coordinate(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse::<f64>().ok())
        .filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"[
        {
            "bairro": " Meireles ",
            "regional": "Regional 2",
            "preco_min_fipe_m2": "7100",
            "preco_medio_fipe_m2": "8450.75",
            "preco_max_fipe_m2": "10200",
            "preco_medio_olx_m2": "8120,50",
            "ibeu": "0.93",
            "idh": "0.953",
            "indice_ambiental": "0.81",
            "indice_moradia": "0.90",
            "renda_media_domiciliar": "10540.00",
            "descricao": "Beachfront district.",
            "paradas_onibus": "98",
            "estacoes_bicicletar": "11",
            "km_ciclovias": "6.2",
            "escolas": "14",
            "unidades_saude": "5",
            "pracas": "9",
            "wifi_publico": "sim",
            "latitude": "-3.7286",
            "longitude": "-38.4953"
        },
        {
            "bairro": "Vila Sparse",
            "preco_medio_fipe_m2": "not-a-number",
            "wifi_publico": "nao",
            "latitude": "-3.8",
            "longitude": ""
        }
    ]"#;

    #[test]
    fn records_parse_with_comma_or_dot_decimals() {
        let catalog = NeighborhoodCatalog::from_json(SAMPLE).unwrap();
        let hood = catalog.find("Meireles").expect("trimmed name matches");
        assert_eq!(hood.band.min_m2, 7_100.0);
        assert_eq!(hood.band.avg_m2, 8_450.75);
        assert_eq!(hood.olx_avg_m2, 8_120.50);
        assert_eq!(hood.amenities.bike_stations, 11);
        assert!(hood.amenities.public_wifi);
        assert!(hood.band.is_well_formed());
        let coords = hood.coordinates.expect("both halves present");
        assert_eq!(coords.latitude, -3.7286);
    }

    #[test]
    fn missing_and_garbage_fields_default_to_zero() {
        let catalog = NeighborhoodCatalog::from_json(SAMPLE).unwrap();
        let hood = catalog.find("Vila Sparse").unwrap();
        assert_eq!(hood.band.avg_m2, 0.0);
        assert_eq!(hood.band.min_m2, 0.0);
        assert_eq!(hood.indicators.wellbeing, 0.0);
        assert_eq!(hood.amenities.bus_stops, 0);
        assert!(!hood.amenities.public_wifi);
        assert_eq!(hood.region, "Unknown");
        // One missing coordinate half drops the pair.
        assert!(hood.coordinates.is_none());
    }

    #[test]
    fn find_is_exact_after_trim_only() {
        let catalog = NeighborhoodCatalog::from_json(SAMPLE).unwrap();
        assert!(catalog.find("  Meireles  ").is_some());
        assert!(catalog.find("meireles").is_none());
        assert!(catalog.find("Nonexistent").is_none());
    }

    #[test]
    fn resolve_name_is_case_insensitive() {
        let catalog = NeighborhoodCatalog::from_json(SAMPLE).unwrap();
        assert_eq!(catalog.resolve_name("meireles"), Some("Meireles"));
        assert_eq!(catalog.resolve_name("MEIRELES "), Some("Meireles"));
        assert_eq!(catalog.resolve_name("Mei"), None);
    }

    #[test]
    fn names_come_out_sorted() {
        let catalog = NeighborhoodCatalog::from_json(SAMPLE).unwrap();
        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["Meireles", "Vila Sparse"]);
    }

    #[test]
    fn embedded_dataset_loads_and_is_well_formed() {
        let catalog = NeighborhoodCatalog::from_json(assets::neighborhood_data()).unwrap();
        assert!(!catalog.is_empty());
        for hood in catalog.iter() {
            assert!(!hood.name.is_empty());
            assert!(hood.band.is_well_formed(), "band out of order: {}", hood.name);
        }
    }
}
