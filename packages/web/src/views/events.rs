//! Campus events board.
//!
//! The route itself is public, but the listing endpoint needs a token, so
//! visitors are prompted to log in instead of firing a doomed request.
//! Hosting and deleting events is reserved for club presidents.

use api::models::{CampusEvent, NewCampusEvent};
use dioxus::prelude::*;
use ui::{use_api, use_session};

use crate::Route;

#[component]
pub fn Events() -> Element {
    let session = use_session();
    let logged_in = session.read().is_logged_in();

    if !logged_in {
        return rsx! {
            div { class: "events-page",
                div { class: "page-header",
                    h2 { "Campus Events" }
                }
                p { class: "page-empty",
                    "Log in to see upcoming campus events. "
                    Link { to: Route::Login {}, class: "auth-link", "Log in" }
                }
            }
        };
    }

    rsx! {
        EventsInner {}
    }
}

#[component]
fn EventsInner() -> Element {
    let client = use_api();
    let session = use_session();

    let identity = session.read().identity().cloned().unwrap_or_default();
    let token = session
        .read()
        .token()
        .map(str::to_string)
        .unwrap_or_default();
    let is_president = identity.has_capability("PRESIDENT");

    let mut events = use_signal(Vec::<CampusEvent>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);
    let mut show_form = use_signal(|| false);
    let mut busy = use_signal(|| false);

    // Host-event form fields.
    let mut heading = use_signal(String::new);
    let mut date = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut max_team_size = use_signal(String::new);
    let mut prize_pool = use_signal(String::new);
    let mut venue = use_signal(String::new);
    let mut club_name = use_signal(String::new);

    let fetch_client = client.clone();
    let fetch_token = token.clone();
    use_future(move || {
        let client = fetch_client.clone();
        let token = fetch_token.clone();
        async move {
            match client.all_events(&token).await {
                Ok(list) => events.set(list),
                Err(err) => {
                    tracing::warn!(%err, "failed to load campus events");
                    error.set(Some("Could not load events. Please try again.".into()));
                }
            }
            loading.set(false);
        }
    });

    let create_client = client.clone();
    let create_token = token.clone();
    let poster = identity.username.clone();
    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        if busy() {
            return;
        }
        let client = create_client.clone();
        let token = create_token.clone();
        let posted_by = poster.clone();
        spawn(async move {
            busy.set(true);
            error.set(None);

            let new_event = NewCampusEvent {
                heading: heading(),
                date: date(),
                description: description(),
                max_team_size: max_team_size(),
                prize_pool: prize_pool(),
                venue: venue(),
                club_name: club_name(),
                posted_by,
            };

            match client.add_event(&token, &new_event).await {
                Ok(()) => {
                    heading.set(String::new());
                    date.set(String::new());
                    description.set(String::new());
                    max_team_size.set(String::new());
                    prize_pool.set(String::new());
                    venue.set(String::new());
                    club_name.set(String::new());
                    show_form.set(false);

                    if let Ok(list) = client.all_events(&token).await {
                        events.set(list);
                    }
                }
                Err(err) => {
                    tracing::warn!(%err, "failed to host event");
                    error.set(Some("Failed to host the event. Please try again.".into()));
                }
            }
            busy.set(false);
        });
    };

    let delete_client = client.clone();
    let delete_token = token.clone();
    let handle_delete = EventHandler::new(move |event_id: String| {
        let client = delete_client.clone();
        let token = delete_token.clone();
        spawn(async move {
            match client.delete_event(&token, &event_id).await {
                Ok(()) => {
                    events.write().retain(|e| e.id != event_id);
                }
                Err(err) => {
                    tracing::warn!(%err, event_id, "failed to delete event");
                    error.set(Some("Could not delete the event.".into()));
                }
            }
        });
    });

    rsx! {
        div { class: "events-page",
            div { class: "page-header",
                h2 { "Campus Events" }
                if is_president {
                    button {
                        class: "btn-primary",
                        onclick: move |_| {
                            let open = show_form();
                            show_form.set(!open);
                        },
                        if show_form() { "Close" } else { "+ Host an Event" }
                    }
                }
            }

            if let Some(err) = error() {
                p { class: "page-error", "{err}" }
            }

            if is_president && show_form() {
                form { class: "post-form", onsubmit: handle_create,
                    input {
                        class: "auth-input",
                        r#type: "text",
                        placeholder: "Event heading",
                        value: "{heading}",
                        oninput: move |evt: FormEvent| heading.set(evt.value()),
                    }
                    input {
                        class: "auth-input",
                        r#type: "date",
                        value: "{date}",
                        oninput: move |evt: FormEvent| date.set(evt.value()),
                    }
                    textarea {
                        class: "auth-input",
                        rows: "3",
                        placeholder: "Description",
                        value: "{description}",
                        oninput: move |evt: FormEvent| description.set(evt.value()),
                    }
                    div { class: "form-row",
                        input {
                            class: "auth-input",
                            r#type: "text",
                            placeholder: "Max team size",
                            value: "{max_team_size}",
                            oninput: move |evt: FormEvent| max_team_size.set(evt.value()),
                        }
                        input {
                            class: "auth-input",
                            r#type: "text",
                            placeholder: "Prize pool",
                            value: "{prize_pool}",
                            oninput: move |evt: FormEvent| prize_pool.set(evt.value()),
                        }
                    }
                    div { class: "form-row",
                        input {
                            class: "auth-input",
                            r#type: "text",
                            placeholder: "Venue",
                            value: "{venue}",
                            oninput: move |evt: FormEvent| venue.set(evt.value()),
                        }
                        input {
                            class: "auth-input",
                            r#type: "text",
                            placeholder: "Club name",
                            value: "{club_name}",
                            oninput: move |evt: FormEvent| club_name.set(evt.value()),
                        }
                    }
                    button {
                        class: "auth-btn",
                        r#type: "submit",
                        disabled: busy(),
                        if busy() { "Hosting..." } else { "Publish Event" }
                    }
                }
            }

            if loading() {
                p { class: "page-loading", "Loading events..." }
            } else if events.read().is_empty() {
                p { class: "page-empty", "No upcoming events." }
            } else {
                div { class: "event-list",
                    for event in events() {
                        EventCard {
                            key: "{event.id}",
                            event: event.clone(),
                            can_delete: is_president,
                            on_delete: handle_delete,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EventCard(event: CampusEvent, can_delete: bool, on_delete: EventHandler<String>) -> Element {
    let event_id = event.id.clone();

    rsx! {
        div { class: "event-card",
            div { class: "post-card-header",
                h3 { "{event.heading}" }
                span { class: "post-tag", "{event.date}" }
            }
            p { class: "event-description", "{event.description}" }
            div { class: "event-facts",
                if !event.venue.is_empty() {
                    span { "Venue: {event.venue}" }
                }
                if !event.max_team_size.is_empty() {
                    span { "Teams of up to {event.max_team_size}" }
                }
                if !event.prize_pool.is_empty() {
                    span { "Prize pool: {event.prize_pool}" }
                }
            }
            p { class: "post-footer",
                span { class: "post-owner", "Hosted by {event.club_name}" }
            }
            if can_delete {
                button {
                    class: "btn-reject",
                    onclick: move |_| on_delete.call(event_id.clone()),
                    "Delete Event"
                }
            }
        }
    }
}
