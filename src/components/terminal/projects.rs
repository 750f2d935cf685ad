//! `projects` rendering: a table on wide viewports, cards on narrow ones.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::components::icons as ic;
use crate::config::WIDE_LAYOUT_MIN_WIDTH;
use crate::models::Repository;

stylance::import_crate_style!(css, "src/components/terminal/projects.module.css");

/// Project name, linked when the repository is public.
fn project_name(repo: &Repository) -> AnyView {
    match &repo.html_url {
        Some(href) => view! {
            <a class=css::name href=href.clone() target="_blank" rel="noopener noreferrer">
                {repo.name.clone()}
            </a>
        }
        .into_any(),
        None => view! { <span class=css::name>{repo.name.clone()}</span> }.into_any(),
    }
}

/// Star count, or an "In Progress" marker for unpublished work.
fn project_status(repo: &Repository) -> AnyView {
    if repo.in_progress {
        view! {
            <span class=css::inProgress>
                <Icon icon=ic::IN_PROGRESS />
                " In Progress"
            </span>
        }
        .into_any()
    } else {
        view! {
            <span class=css::stars>
                <Icon icon=ic::STAR />
                {format!(" {}", repo.stars())}
            </span>
        }
        .into_any()
    }
}

#[component]
pub fn Projects(rows: Vec<Repository>) -> impl IntoView {
    let is_wide = use_media_query(format!("(min-width: {WIDE_LAYOUT_MIN_WIDTH}px)"));
    let rows = StoredValue::new(rows);

    move || {
        if is_wide.get() {
            view! {
                <table class=css::table data-testid="projects-table">
                    <thead>
                        <tr>
                            <th>"NAME"</th>
                            <th>"DESCRIPTION"</th>
                            <th>"STARS"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows.with_value(|rows| rows.iter().map(|repo| view! {
                            <tr>
                                <td>{project_name(repo)}</td>
                                <td>{repo.description().to_string()}</td>
                                <td>{project_status(repo)}</td>
                            </tr>
                        }).collect_view())}
                    </tbody>
                </table>
            }
            .into_any()
        } else {
            view! {
                <ul class=css::list data-testid="projects-list">
                    {rows.with_value(|rows| rows.iter().map(|repo| view! {
                        <li class=css::card>
                            <div>{project_name(repo)}</div>
                            <div class=css::description>{repo.description().to_string()}</div>
                            <div>{project_status(repo)}</div>
                        </li>
                    }).collect_view())}
                </ul>
            }
            .into_any()
        }
    }
}
