use crate::output::print_json;
use genesix_core::auth::{MemoryAuthProvider, User};
use genesix_core::navigator::Navigator;

pub fn run(fragment: &str, signed_in: bool, json: bool) -> anyhow::Result<()> {
    let mut auth = MemoryAuthProvider::new();
    if signed_in {
        auth = auth.signed_in(User {
            name: "genesix".to_string(),
            email: "cli@localhost".to_string(),
        });
    }
    let nav = Navigator::new(auth, fragment);
    let page = nav.current();
    let view = nav.view();

    if json {
        #[derive(serde::Serialize)]
        struct RouteOutput {
            page: String,
            fragment: String,
            view: genesix_core::navigator::View,
        }
        return print_json(&RouteOutput {
            page: page.to_string(),
            fragment: nav.router().fragment(),
            view,
        });
    }

    println!("Page:     {page}");
    println!("Fragment: {}", nav.router().fragment());
    println!("View:     {view:?}");
    Ok(())
}
