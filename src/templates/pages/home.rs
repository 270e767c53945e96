// templates/pages/home.rs

use crate::filters::actions::{format_area, format_price};
use crate::filters::record::{FilterRecord, Flag, FlagCategory, RangeKind, RoomCategory};
use crate::filters::reconciler::DraftReconciler;
use crate::templates::{
    components::{card, flag_chip, range_field, room_count_row},
    desktop_layout,
};
use maud::{html, Markup};

/// Search page: summary of the applied filter plus the editor form, seeded
/// through the reconciler exactly the way a freshly opened editor would be.
pub fn home_page(applied: Option<&FilterRecord>, logged_in: bool) -> Markup {
    let mut reconciler = DraftReconciler::new();
    reconciler.sync(true, applied);

    desktop_layout(
        "Buscar imóveis",
        logged_in,
        html! {
            h1 { "Buscar imóveis" }

            (card("Filtros aplicados", applied_summary(applied)))

            div id="filter-editor"
                data-open-endpoint="/editor/open"
                data-action-endpoint="/editor/action"
                data-range-endpoint="/editor/range"
            {
                (editor_form(&reconciler.draft, reconciler.area_slider, reconciler.price_slider))
            }
        },
    )
}

/// The editor body, also served standalone as the partial swapped in by
/// the /editor/* endpoints.
pub fn editor_form(
    draft: &FilterRecord,
    area_slider: (u64, u64),
    price_slider: (u64, u64),
) -> Markup {
    html! {
        form method="post" action="/editor/apply" {
            (flag_section("Transação", FlagCategory::Transaction, draft))
            (flag_section("Finalidade", FlagCategory::Purpose, draft))
            (flag_section("Apartamentos", FlagCategory::ApartmentSubtype, draft))
            (flag_section("Comercial", FlagCategory::CommercialSubtype, draft))
            (flag_section("Casas e rural", FlagCategory::HouseSubtype, draft))
            (flag_section("Terrenos", FlagCategory::LandSubtype, draft))
            (flag_section("Outros", FlagCategory::OtherSubtype, draft))
            (flag_section("Anunciante", FlagCategory::Advertiser, draft))
            (flag_section("Lançamentos", FlagCategory::Launch, draft))

            fieldset {
                legend { "Cômodos" }
                (room_count_row("Quartos", RoomCategory::Bedrooms, draft))
                (room_count_row("Banheiros", RoomCategory::Bathrooms, draft))
                (room_count_row("Suítes", RoomCategory::Suites, draft))
                (room_count_row("Vagas", RoomCategory::ParkingSpots, draft))
            }

            fieldset {
                legend { "Área e preço" }
                (range_field(
                    "Área (m²)",
                    "area",
                    &format_area(area_slider.0),
                    &format_area(area_slider.1),
                ))
                (range_field(
                    "Preço",
                    "price",
                    &format_price(price_slider.0),
                    &format_price(price_slider.1),
                ))
            }

            fieldset {
                legend { "Opcionais" }
                input type="text" name="keywords" value=(draft.keywords)
                    placeholder="piscina, varanda, churrasqueira...";
            }

            div class="editor-actions" {
                button type="submit" { "Aplicar" }
                button type="submit" formaction="/api/filters/clear" { "Limpar" }
            }
        }
    }
}

fn flag_section(title: &str, category: FlagCategory, draft: &FilterRecord) -> Markup {
    html! {
        fieldset {
            legend { (title) }
            @for &flag in Flag::ALL.iter().filter(|f| f.category() == category) {
                (flag_chip(flag, draft.flags.contains(&flag)))
            }
        }
    }
}

fn applied_summary(applied: Option<&FilterRecord>) -> Markup {
    match applied {
        None => html! { p { "Nenhum filtro aplicado." } },
        Some(r) => html! {
            ul {
                @if !r.cities.is_empty() {
                    li { "Cidades: " (r.cities.join(", ")) }
                }
                @if !r.neighborhoods.is_empty() {
                    li { "Bairros: " (r.neighborhoods.join(", ")) }
                }
                li { "Área: " (format_area(r.range(RangeKind::Area).0)) " a "
                     (format_area(r.range(RangeKind::Area).1)) " m²" }
                li { "Preço: " (format_price(r.range(RangeKind::Price).0)) " a "
                     (format_price(r.range(RangeKind::Price).1)) }
                @if !r.flags.is_empty() {
                    li { (r.flags.len()) " critérios marcados" }
                }
            }
        },
    }
}
