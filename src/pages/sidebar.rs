use taskpad::core::state::AppState;

fn initial(name: &str) -> String {
    name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default()
}

/// List names with the active one marked. Collapsed shows initials only.
pub fn sidebar_view(state: &AppState) -> String {
    let mut out = String::new();
    if !state.sidebar_collapsed {
        out.push_str("My Lists\n");
    }

    for list in &state.lists {
        let marker = if list.id == state.active_list_id { '>' } else { ' ' };
        if state.sidebar_collapsed {
            out.push_str(&format!("{} {}\n", marker, initial(&list.name)));
        } else {
            let (done, total) = list.completion_ratio();
            out.push_str(&format!(
                "{} {} ({}/{})  [{}]\n",
                marker, list.name, done, total, list.id
            ));
        }
    }
    out
}
