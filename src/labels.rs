// src/labels.rs
//
// Display labels for upstream property-type codes. The upstream API mixes
// English and Portuguese codes, with inconsistent casing and accents, so
// lookup normalizes both sides before comparing.

/// (normalized upstream code, display label)
const LABELS: &[(&str, &str)] = &[
    ("apartment", "Apartamento"),
    ("apartamento", "Apartamento"),
    ("penthouse", "Cobertura"),
    ("cobertura", "Cobertura"),
    ("studio", "Kitnet/Studio"),
    ("kitnet", "Kitnet/Studio"),
    ("flat", "Flat"),
    ("loft", "Loft"),
    ("house", "Casa"),
    ("casa", "Casa"),
    ("condominium house", "Casa de Condomínio"),
    ("casa de condominio", "Casa de Condomínio"),
    ("sobrado", "Sobrado"),
    ("farm", "Fazenda"),
    ("fazenda", "Fazenda"),
    ("sitio", "Sítio"),
    ("chacara", "Chácara"),
    ("land", "Terreno"),
    ("terreno", "Terreno"),
    ("allotment land", "Terreno em Condomínio"),
    ("terreno em condominio", "Terreno em Condomínio"),
    ("commercial property", "Imóvel Comercial"),
    ("ponto comercial", "Ponto Comercial"),
    ("store", "Loja"),
    ("loja", "Loja"),
    ("office", "Sala Comercial"),
    ("sala comercial", "Sala Comercial"),
    ("warehouse", "Galpão"),
    ("galpao", "Galpão"),
    ("commercial building", "Prédio Comercial"),
    ("predio comercial", "Prédio Comercial"),
    ("hotel", "Hotel"),
    ("garage", "Garagem"),
    ("garagem", "Garagem"),
];

/// Maps an upstream property-type code to its Portuguese display label.
///
/// Lookup is case- and accent-insensitive. When no key matches exactly, a
/// substring containment match is tried in both directions; ties go to the
/// longest matching key so the result does not depend on table order.
/// Returns an empty string when nothing matches.
pub fn property_type_label(code: &str) -> String {
    let needle = normalize(code);
    if needle.is_empty() {
        return String::new();
    }

    for (key, label) in LABELS {
        if *key == needle {
            return (*label).to_string();
        }
    }

    let mut best: Option<(&str, &str)> = None;
    for (key, label) in LABELS {
        if needle.contains(key) || key.contains(needle.as_str()) {
            let better = match best {
                Some((best_key, _)) => key.len() > best_key.len(),
                None => true,
            };
            if better {
                best = Some((key, label));
            }
        }
    }

    best.map(|(_, label)| label.to_string()).unwrap_or_default()
}

/// Lowercases and folds the accented characters that occur in Portuguese
/// property-type codes.
fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' => 'a',
            'é' | 'ê' => 'e',
            'í' => 'i',
            'ó' | 'ô' | 'õ' => 'o',
            'ú' | 'ü' => 'u',
            'ç' => 'c',
            other => other,
        })
        .collect()
}
