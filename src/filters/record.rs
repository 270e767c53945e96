// src/filters/record.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub const AREA_MAX: u64 = 1_000_000;
pub const PRICE_MAX: u64 = 100_000_000;

/// The closed set of boolean search criteria. Every flag belongs to exactly
/// one [`FlagCategory`]; a flag that is absent from the record's set is off.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    // Transaction
    Venda,
    Aluguel,
    // Purpose
    Residencial,
    Comercial,
    Industrial,
    Rural,
    // Apartment subtypes
    ApartamentoPadrao,
    Cobertura,
    Duplex,
    Triplex,
    Kitnet,
    Loft,
    Flat,
    // Commercial subtypes
    Loja,
    SalaComercial,
    Galpao,
    PredioComercial,
    Hotel,
    Consultorio,
    Deposito,
    Garagem,
    PontoComercial,
    // House / farm subtypes
    Casa,
    CasaDeCondominio,
    Sobrado,
    Chacara,
    Fazenda,
    Sitio,
    // Land subtypes
    Terreno,
    TerrenoEmCondominio,
    // Other subtypes
    BoxGaragem,
    Quiosque,
    Pousada,
    Clinica,
    Estacionamento,
    Galeria,
    Haras,
    Ilha,
    Tombado,
    // Advertiser
    Imobiliaria,
    Corretor,
    Proprietario,
    // New launches
    Lancamento,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagCategory {
    Transaction,
    Purpose,
    ApartmentSubtype,
    CommercialSubtype,
    HouseSubtype,
    LandSubtype,
    OtherSubtype,
    Advertiser,
    Launch,
}

impl Flag {
    pub const ALL: [Flag; 43] = [
        Flag::Venda,
        Flag::Aluguel,
        Flag::Residencial,
        Flag::Comercial,
        Flag::Industrial,
        Flag::Rural,
        Flag::ApartamentoPadrao,
        Flag::Cobertura,
        Flag::Duplex,
        Flag::Triplex,
        Flag::Kitnet,
        Flag::Loft,
        Flag::Flat,
        Flag::Loja,
        Flag::SalaComercial,
        Flag::Galpao,
        Flag::PredioComercial,
        Flag::Hotel,
        Flag::Consultorio,
        Flag::Deposito,
        Flag::Garagem,
        Flag::PontoComercial,
        Flag::Casa,
        Flag::CasaDeCondominio,
        Flag::Sobrado,
        Flag::Chacara,
        Flag::Fazenda,
        Flag::Sitio,
        Flag::Terreno,
        Flag::TerrenoEmCondominio,
        Flag::BoxGaragem,
        Flag::Quiosque,
        Flag::Pousada,
        Flag::Clinica,
        Flag::Estacionamento,
        Flag::Galeria,
        Flag::Haras,
        Flag::Ilha,
        Flag::Tombado,
        Flag::Imobiliaria,
        Flag::Corretor,
        Flag::Proprietario,
        Flag::Lancamento,
    ];

    pub fn category(self) -> FlagCategory {
        use Flag::*;
        match self {
            Venda | Aluguel => FlagCategory::Transaction,
            Residencial | Comercial | Industrial | Rural => FlagCategory::Purpose,
            ApartamentoPadrao | Cobertura | Duplex | Triplex | Kitnet | Loft | Flat => {
                FlagCategory::ApartmentSubtype
            }
            Loja | SalaComercial | Galpao | PredioComercial | Hotel | Consultorio | Deposito
            | Garagem | PontoComercial => FlagCategory::CommercialSubtype,
            Casa | CasaDeCondominio | Sobrado | Chacara | Fazenda | Sitio => {
                FlagCategory::HouseSubtype
            }
            Terreno | TerrenoEmCondominio => FlagCategory::LandSubtype,
            BoxGaragem | Quiosque | Pousada | Clinica | Estacionamento | Galeria | Haras | Ilha
            | Tombado => FlagCategory::OtherSubtype,
            Imobiliaria | Corretor | Proprietario => FlagCategory::Advertiser,
            Lancamento => FlagCategory::Launch,
        }
    }
}

/// The room-count fields a user can constrain. Values live in 1..=4,
/// where 4 means "4 or more"; `None` means no constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomCategory {
    Bedrooms,
    Bathrooms,
    Suites,
    ParkingSpots,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeKind {
    Area,
    Price,
}

impl RangeKind {
    pub fn bound(self) -> u64 {
        match self {
            RangeKind::Area => AREA_MAX,
            RangeKind::Price => PRICE_MAX,
        }
    }
}

/// A user-drawn map shape restricting the search area. The circle radius is
/// kept as text because the upstream API round-trips it that way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geometry {
    Polygon { rings: Vec<Vec<[f64; 2]>> },
    Circle { center: [f64; 2], radius: String },
}

/// The canonical search filter. A draft copy of this record backs the filter
/// editor; the applied copy lives in the [`SelectionStore`].
///
/// [`SelectionStore`]: crate::filters::selection::SelectionStore
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterRecord {
    pub search: String,
    pub cities: Vec<String>,
    pub neighborhoods: Vec<String>,
    pub address_coordinates: Option<(f64, f64)>,
    pub address_zoom: Option<f64>,
    pub drawing_geometries: Option<Vec<Geometry>>,

    pub flags: BTreeSet<Flag>,

    pub bedrooms: Option<u8>,
    pub bathrooms: Option<u8>,
    pub suites: Option<u8>,
    pub parking_spots: Option<u8>,

    pub area_min: u64,
    pub area_max: u64,
    pub price_min: u64,
    pub price_max: u64,

    pub keywords: String,
}

impl Default for FilterRecord {
    fn default() -> Self {
        FilterRecord {
            search: String::new(),
            cities: Vec::new(),
            neighborhoods: Vec::new(),
            address_coordinates: None,
            address_zoom: None,
            drawing_geometries: None,
            flags: BTreeSet::new(),
            bedrooms: None,
            bathrooms: None,
            suites: None,
            parking_spots: None,
            area_min: 0,
            area_max: AREA_MAX,
            price_min: 0,
            price_max: PRICE_MAX,
            keywords: String::new(),
        }
    }
}

impl FilterRecord {
    pub fn room_count(&self, category: RoomCategory) -> Option<u8> {
        match category {
            RoomCategory::Bedrooms => self.bedrooms,
            RoomCategory::Bathrooms => self.bathrooms,
            RoomCategory::Suites => self.suites,
            RoomCategory::ParkingSpots => self.parking_spots,
        }
    }

    pub fn set_room_count(&mut self, category: RoomCategory, value: Option<u8>) {
        match category {
            RoomCategory::Bedrooms => self.bedrooms = value,
            RoomCategory::Bathrooms => self.bathrooms = value,
            RoomCategory::Suites => self.suites = value,
            RoomCategory::ParkingSpots => self.parking_spots = value,
        }
    }

    pub fn range(&self, kind: RangeKind) -> (u64, u64) {
        match kind {
            RangeKind::Area => (self.area_min, self.area_max),
            RangeKind::Price => (self.price_min, self.price_max),
        }
    }

    pub fn set_range_pair(&mut self, kind: RangeKind, min: u64, max: u64) {
        match kind {
            RangeKind::Area => {
                self.area_min = min;
                self.area_max = max;
            }
            RangeKind::Price => {
                self.price_min = min;
                self.price_max = max;
            }
        }
    }
}

/// Only these fields participate in change detection. Location and geometry
/// fields are managed by a separate concern and deliberately excluded, so an
/// external geometry-only update never looks like a filter change.
#[derive(Serialize)]
struct BusinessFields<'a> {
    flags: &'a BTreeSet<Flag>,
    bedrooms: Option<u8>,
    bathrooms: Option<u8>,
    suites: Option<u8>,
    parking_spots: Option<u8>,
    area_min: u64,
    area_max: u64,
    price_min: u64,
    price_max: u64,
    keywords: &'a str,
}

/// Canonical serialization of the business-field subset of a record.
/// Two records that differ only in location/geometry fields fingerprint
/// identically. An absent record fingerprints to the empty string.
pub fn fingerprint(record: Option<&FilterRecord>) -> String {
    let Some(r) = record else {
        return String::new();
    };

    let fields = BusinessFields {
        flags: &r.flags,
        bedrooms: r.bedrooms,
        bathrooms: r.bathrooms,
        suites: r.suites,
        parking_spots: r.parking_spots,
        area_min: r.area_min,
        area_max: r.area_max,
        price_min: r.price_min,
        price_max: r.price_max,
        keywords: &r.keywords,
    };

    // Struct field order and BTreeSet iteration order are both stable, so
    // this serialization is canonical.
    serde_json::to_string(&fields).unwrap_or_default()
}
