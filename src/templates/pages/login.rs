// templates/pages/login.rs

use crate::templates::{components::card, desktop_layout};
use maud::{html, Markup};

pub fn login_page() -> Markup {
    desktop_layout(
        "Entrar",
        false,
        html! {
            h1 { "Entrar" }

            (card("Entrar com o Google", html! {
                p { "Use sua conta Google para acessar a busca de imóveis." }
                // The browser SDK fills in the credential and posts it as
                // JSON to /auth/signInGoogle.
                div id="google-signin" data-endpoint="/auth/signInGoogle" {
                    button type="button" class="btn" { "Entrar com o Google" }
                }
            }))
        },
    )
}
