use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The 27 Brazilian federative units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
#[allow(clippy::upper_case_acronyms)]
pub enum Uf {
    AC,
    AL,
    AP,
    AM,
    BA,
    CE,
    DF,
    ES,
    GO,
    MA,
    MT,
    MS,
    MG,
    PA,
    PB,
    PR,
    PE,
    PI,
    RJ,
    RN,
    RS,
    RO,
    RR,
    SC,
    SP,
    SE,
    TO,
}

impl Uf {
    pub fn as_str(&self) -> &'static str {
        match self {
            Uf::AC => "AC",
            Uf::AL => "AL",
            Uf::AP => "AP",
            Uf::AM => "AM",
            Uf::BA => "BA",
            Uf::CE => "CE",
            Uf::DF => "DF",
            Uf::ES => "ES",
            Uf::GO => "GO",
            Uf::MA => "MA",
            Uf::MT => "MT",
            Uf::MS => "MS",
            Uf::MG => "MG",
            Uf::PA => "PA",
            Uf::PB => "PB",
            Uf::PR => "PR",
            Uf::PE => "PE",
            Uf::PI => "PI",
            Uf::RJ => "RJ",
            Uf::RN => "RN",
            Uf::RS => "RS",
            Uf::RO => "RO",
            Uf::RR => "RR",
            Uf::SC => "SC",
            Uf::SP => "SP",
            Uf::SE => "SE",
            Uf::TO => "TO",
        }
    }
}

impl fmt::Display for Uf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Uf {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AC" => Ok(Uf::AC),
            "AL" => Ok(Uf::AL),
            "AP" => Ok(Uf::AP),
            "AM" => Ok(Uf::AM),
            "BA" => Ok(Uf::BA),
            "CE" => Ok(Uf::CE),
            "DF" => Ok(Uf::DF),
            "ES" => Ok(Uf::ES),
            "GO" => Ok(Uf::GO),
            "MA" => Ok(Uf::MA),
            "MT" => Ok(Uf::MT),
            "MS" => Ok(Uf::MS),
            "MG" => Ok(Uf::MG),
            "PA" => Ok(Uf::PA),
            "PB" => Ok(Uf::PB),
            "PR" => Ok(Uf::PR),
            "PE" => Ok(Uf::PE),
            "PI" => Ok(Uf::PI),
            "RJ" => Ok(Uf::RJ),
            "RN" => Ok(Uf::RN),
            "RS" => Ok(Uf::RS),
            "RO" => Ok(Uf::RO),
            "RR" => Ok(Uf::RR),
            "SC" => Ok(Uf::SC),
            "SP" => Ok(Uf::SP),
            "SE" => Ok(Uf::SE),
            "TO" => Ok(Uf::TO),
            _ => Err(()),
        }
    }
}

/// Macro-regions used for the flat-rate shipping tiers. `Brasil` is the
/// generic fallback label for a UF code the grouping does not recognize.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Region {
    Sudeste,
    Sul,
    #[serde(rename = "Centro-Oeste")]
    CentroOeste,
    Nordeste,
    Norte,
    Brasil,
}

impl Region {
    pub fn from_uf(uf: Uf) -> Self {
        match uf {
            Uf::SP | Uf::RJ | Uf::ES | Uf::MG => Region::Sudeste,
            Uf::PR | Uf::SC | Uf::RS => Region::Sul,
            Uf::DF | Uf::GO | Uf::MT | Uf::MS => Region::CentroOeste,
            Uf::BA | Uf::SE | Uf::PE | Uf::AL | Uf::PB | Uf::RN | Uf::CE | Uf::PI | Uf::MA => {
                Region::Nordeste
            }
            Uf::PA | Uf::AP | Uf::AM | Uf::RR | Uf::AC | Uf::RO | Uf::TO => Region::Norte,
        }
    }

    /// Lenient string-typed grouping for boundaries that hand over raw UF
    /// codes; anything unrecognized maps to the nationwide fallback.
    pub fn from_code(code: &str) -> Self {
        code.parse::<Uf>().map(Region::from_uf).unwrap_or(Region::Brasil)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Sudeste => "Sudeste",
            Region::Sul => "Sul",
            Region::CentroOeste => "Centro-Oeste",
            Region::Nordeste => "Nordeste",
            Region::Norte => "Norte",
            Region::Brasil => "Brasil",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
