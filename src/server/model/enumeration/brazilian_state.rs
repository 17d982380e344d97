//! Brazilian federative units: the 26 states and the federal district.

use std::{fmt, str::FromStr};

use super::{Enumeration, UNDEFINED_NAME};
use crate::server::error::enumeration::EnumDecodeError;

/// A Brazilian federative unit, persisted as its upper-case accented name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BrazilianState {
    #[default]
    Undefined = 0,
    Acre = 1,
    Alagoas = 2,
    Amapa = 3,
    Amazonas = 4,
    Bahia = 5,
    Ceara = 6,
    EspiritoSanto = 7,
    Goias = 8,
    Maranhao = 9,
    MatoGrosso = 10,
    MatoGrossoDoSul = 11,
    MinasGerais = 12,
    Para = 13,
    Paraiba = 14,
    Parana = 15,
    Pernambuco = 16,
    Piaui = 17,
    RioDeJaneiro = 18,
    RioGrandeDoNorte = 19,
    RioGrandeDoSul = 20,
    Rondonia = 21,
    Roraima = 22,
    SantaCatarina = 23,
    SaoPaulo = 24,
    Sergipe = 25,
    Tocantins = 26,
    DistritoFederal = 27,
}

impl BrazilianState {
    /// Two-letter federative unit code, e.g. `"SP"`. `Undefined` has none.
    pub fn abbreviation(self) -> Option<&'static str> {
        let abbreviation = match self {
            Self::Undefined => return None,
            Self::Acre => "AC",
            Self::Alagoas => "AL",
            Self::Amapa => "AP",
            Self::Amazonas => "AM",
            Self::Bahia => "BA",
            Self::Ceara => "CE",
            Self::EspiritoSanto => "ES",
            Self::Goias => "GO",
            Self::Maranhao => "MA",
            Self::MatoGrosso => "MT",
            Self::MatoGrossoDoSul => "MS",
            Self::MinasGerais => "MG",
            Self::Para => "PA",
            Self::Paraiba => "PB",
            Self::Parana => "PR",
            Self::Pernambuco => "PE",
            Self::Piaui => "PI",
            Self::RioDeJaneiro => "RJ",
            Self::RioGrandeDoNorte => "RN",
            Self::RioGrandeDoSul => "RS",
            Self::Rondonia => "RO",
            Self::Roraima => "RR",
            Self::SantaCatarina => "SC",
            Self::SaoPaulo => "SP",
            Self::Sergipe => "SE",
            Self::Tocantins => "TO",
            Self::DistritoFederal => "DF",
        };

        Some(abbreviation)
    }
}

impl Enumeration for BrazilianState {
    const KIND: &'static str = "brazilian state";
    const UNDEFINED: Self = Self::Undefined;
    const MEMBERS: &'static [Self] = &[
        Self::Acre,
        Self::Alagoas,
        Self::Amapa,
        Self::Amazonas,
        Self::Bahia,
        Self::Ceara,
        Self::EspiritoSanto,
        Self::Goias,
        Self::Maranhao,
        Self::MatoGrosso,
        Self::MatoGrossoDoSul,
        Self::MinasGerais,
        Self::Para,
        Self::Paraiba,
        Self::Parana,
        Self::Pernambuco,
        Self::Piaui,
        Self::RioDeJaneiro,
        Self::RioGrandeDoNorte,
        Self::RioGrandeDoSul,
        Self::Rondonia,
        Self::Roraima,
        Self::SantaCatarina,
        Self::SaoPaulo,
        Self::Sergipe,
        Self::Tocantins,
        Self::DistritoFederal,
    ];

    fn code(self) -> i64 {
        self as i64
    }

    fn display_name(self) -> &'static str {
        match self {
            Self::Undefined => UNDEFINED_NAME,
            Self::Acre => "ACRE",
            Self::Alagoas => "ALAGOAS",
            Self::Amapa => "AMAPÁ",
            Self::Amazonas => "AMAZONAS",
            Self::Bahia => "BAHIA",
            Self::Ceara => "CEARÁ",
            Self::EspiritoSanto => "ESPÍRITO SANTO",
            Self::Goias => "GOIÁS",
            Self::Maranhao => "MARANHÃO",
            Self::MatoGrosso => "MATO GROSSO",
            Self::MatoGrossoDoSul => "MATO GROSSO DO SUL",
            Self::MinasGerais => "MINAS GERAIS",
            Self::Para => "PARÁ",
            Self::Paraiba => "PARAÍBA",
            Self::Parana => "PARANÁ",
            Self::Pernambuco => "PERNAMBUCO",
            Self::Piaui => "PIAUÍ",
            Self::RioDeJaneiro => "RIO DE JANEIRO",
            Self::RioGrandeDoNorte => "RIO GRANDE DO NORTE",
            Self::RioGrandeDoSul => "RIO GRANDE DO SUL",
            Self::Rondonia => "RONDÔNIA",
            Self::Roraima => "RORAIMA",
            Self::SantaCatarina => "SANTA CATARINA",
            Self::SaoPaulo => "SÃO PAULO",
            Self::Sergipe => "SERGIPE",
            Self::Tocantins => "TOCANTINS",
            Self::DistritoFederal => "DISTRITO FEDERAL",
        }
    }
}

impl fmt::Display for BrazilianState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for BrazilianState {
    type Err = EnumDecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}
