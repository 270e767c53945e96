use crate::filters::record::{FilterRecord, Flag, RoomCategory};
use maud::{html, Markup};

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// One selectable filter flag, rendered as a chip.
pub fn flag_chip(flag: Flag, active: bool) -> Markup {
    let classes = if active { "chip chip-active" } else { "chip" };
    let code = serde_json::to_string(&flag).unwrap_or_default();
    html! {
        button
            type="button"
            class=(classes)
            data-flag=(code.trim_matches('"'))
        {
            (flag_label(flag))
        }
    }
}

/// Row of 1 / 2 / 3 / 4+ buttons for one room-count category.
pub fn room_count_row(label: &str, category: RoomCategory, record: &FilterRecord) -> Markup {
    let selected = record.room_count(category);
    html! {
        div class="room-row" {
            span class="room-label" { (label) }
            @for value in 1u8..=4 {
                @let classes = if selected == Some(value) { "chip chip-active" } else { "chip" };
                button type="button" class=(classes) {
                    @if value == 4 { "4+" } @else { (value) }
                }
            }
        }
    }
}

/// Min/max text inputs for a numeric range, pre-filled with formatted values.
pub fn range_field(label: &str, name: &str, min_text: &str, max_text: &str) -> Markup {
    html! {
        div class="range-field" {
            span class="range-label" { (label) }
            input type="text" name={ (name) "_min" } value=(min_text) inputmode="numeric";
            span { "até" }
            input type="text" name={ (name) "_max" } value=(max_text) inputmode="numeric";
        }
    }
}

pub fn flag_label(flag: Flag) -> &'static str {
    use Flag::*;
    match flag {
        Venda => "Venda",
        Aluguel => "Aluguel",
        Residencial => "Residencial",
        Comercial => "Comercial",
        Industrial => "Industrial",
        Rural => "Rural",
        ApartamentoPadrao => "Apartamento Padrão",
        Cobertura => "Cobertura",
        Duplex => "Duplex",
        Triplex => "Triplex",
        Kitnet => "Kitnet/Studio",
        Loft => "Loft",
        Flat => "Flat",
        Loja => "Loja",
        SalaComercial => "Sala Comercial",
        Galpao => "Galpão",
        PredioComercial => "Prédio Comercial",
        Hotel => "Hotel",
        Consultorio => "Consultório",
        Deposito => "Depósito",
        Garagem => "Garagem",
        PontoComercial => "Ponto Comercial",
        Casa => "Casa",
        CasaDeCondominio => "Casa de Condomínio",
        Sobrado => "Sobrado",
        Chacara => "Chácara",
        Fazenda => "Fazenda",
        Sitio => "Sítio",
        Terreno => "Terreno",
        TerrenoEmCondominio => "Terreno em Condomínio",
        BoxGaragem => "Box/Garagem",
        Quiosque => "Quiosque",
        Pousada => "Pousada",
        Clinica => "Clínica",
        Estacionamento => "Estacionamento",
        Galeria => "Galeria",
        Haras => "Haras",
        Ilha => "Ilha",
        Tombado => "Imóvel Tombado",
        Imobiliaria => "Imobiliária",
        Corretor => "Corretor",
        Proprietario => "Proprietário",
        Lancamento => "Lançamento",
    }
}
