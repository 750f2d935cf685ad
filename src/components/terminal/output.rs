use leptos::prelude::*;
use leptos_icons::Icon;

use super::Projects;
use crate::components::icons as ic;
use crate::models::{ErrorBlock, HelpLine, Link, OutputData, OutputEntry, ProfileCard};

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

/// Two-column `key  description` rows.
fn help_rows(lines: Vec<HelpLine>, item_testid: &'static str) -> impl IntoView {
    lines
        .into_iter()
        .map(|line| {
            view! {
                <div class=css::helpRow data-testid=item_testid>
                    <span class=css::helpKey>{line.key}</span>
                    <span class=css::textFg>{line.description}</span>
                </div>
            }
        })
        .collect_view()
}

fn error_view(block: ErrorBlock) -> impl IntoView {
    view! {
        <div class=css::error>
            <div class=css::textRed>{block.message}</div>
            {block
                .details
                .into_iter()
                .map(|d| view! { <div class=css::textFg>{d}</div> })
                .collect_view()}
            {block.usage.map(|usage| view! {
                <div class=css::textFg>"Usage:"</div>
                <pre class=css::usage>{usage}</pre>
            })}
        </div>
    }
}

fn link_row(icon: icondata::Icon, link: Link) -> impl IntoView {
    view! {
        <div class=css::profileRow>
            <span class=css::profileIcon><Icon icon=icon /></span>
            <a class=css::link href=link.href target="_blank" rel="noopener noreferrer">
                {link.label}
            </a>
        </div>
    }
}

fn profile_view(card: ProfileCard) -> impl IntoView {
    view! {
        <div class=css::profile>
            <div class=css::profileRow>
                <span class=css::profileIcon><Icon icon=ic::USER /></span>
                <span class=css::textGreen>{card.name}</span>
            </div>
            {link_row(ic::EMAIL, card.email)}
            {link_row(ic::GITHUB, card.github)}
            {link_row(ic::LINKEDIN, card.linkedin)}
        </div>
    }
}

fn data_view(data: OutputData) -> AnyView {
    match data {
        OutputData::Text(text) => view! {
            <div class=format!("{} {}", css::line, css::textFg)>{text}</div>
        }
        .into_any(),
        OutputData::Empty => view! { <div class=css::lineEmpty></div> }.into_any(),
        OutputData::Loading => view! {
            <div class=format!("{} {}", css::line, css::textDim)>"One moment..."</div>
        }
        .into_any(),
        OutputData::Error(block) => error_view(block).into_any(),
        OutputData::Help {
            commands,
            keybindings,
        } => view! {
            <div class=css::help>
                <div data-testid="help-commands">
                    <div class=css::helpHeading>"Commands:"</div>
                    {help_rows(commands, "help-command-each")}
                </div>
                <div data-testid="help-keybindings">
                    <div class=css::helpHeading>"Keybindings:"</div>
                    {help_rows(keybindings, "help-keybinding-item")}
                </div>
            </div>
        }
        .into_any(),
        OutputData::CommandHelp {
            name,
            description,
            usage,
        } => view! {
            <div class=css::help>
                <div data-testid="help-oneline">{format!("{name} - {description}")}</div>
                <div class=css::helpHeading>"Usage:"</div>
                <pre class=css::usage>{usage}</pre>
            </div>
        }
        .into_any(),
        OutputData::Profile(card) => profile_view(card).into_any(),
        OutputData::Projects(rows) => view! { <Projects rows=rows /> }.into_any(),
        OutputData::Json(json) => view! {
            <pre class=css::json data-testid="projects-json">{json}</pre>
        }
        .into_any(),
    }
}

/// One submission: the echoed prompt line and its result.
#[component]
pub fn Output(entry: OutputEntry) -> impl IntoView {
    let kind = entry.data.as_ref().map(|d| d.kind().as_str());
    view! {
        <div class=css::entry data-kind=kind>
            <div class=css::command>
                <span class=format!("{} glow", css::textGreen)>{entry.prompt}</span>
                " "
                <span class=css::textFg>{entry.input}</span>
            </div>
            {entry.data.map(data_view)}
        </div>
    }
}
