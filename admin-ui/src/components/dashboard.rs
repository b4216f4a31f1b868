use crate::bridge;
use crate::notice::Notice;
use console_core::pipeline::{Jurisdiction, JurisdictionStats};
use leptos::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn Dashboard() -> impl IntoView {
    let jurisdictions = create_rw_signal(Vec::<Jurisdiction>::new());
    let selected = create_rw_signal(None::<String>);
    let stats = create_rw_signal(None::<JurisdictionStats>);
    let loading = create_rw_signal(false);
    let last_task = create_rw_signal(None::<String>);
    let task_note = create_rw_signal(None::<String>);
    let notice = create_rw_signal(None::<Notice>);

    let load_jurisdictions = move || {
        spawn_local(async move {
            match bridge::fetch_jurisdictions().await {
                Ok(list) => {
                    let first = list.first().map(|j| j.id.clone());
                    jurisdictions.set(list);
                    if selected.get_untracked().is_none() {
                        selected.set(first);
                    }
                    notice.set(None);
                }
                Err(e) => notice.set(Some(Notice::error(format!(
                    "Failed to load jurisdictions: {e}"
                )))),
            }
        });
    };

    let load_stats = move |id: String| {
        loading.set(true);
        spawn_local(async move {
            match bridge::fetch_dashboard(&id).await {
                Ok(s) => {
                    stats.set(Some(s));
                    notice.set(None);
                }
                Err(e) => {
                    stats.set(None);
                    notice.set(Some(Notice::error(format!(
                        "Failed to load dashboard stats: {e}"
                    ))));
                }
            }
            loading.set(false);
        });
    };

    create_effect(move |_| {
        if let Some(id) = selected.get() {
            load_stats(id);
        }
    });

    load_jurisdictions();

    let scrape = move |force: bool| {
        let Some(stats) = stats.get_untracked() else {
            return;
        };
        task_note.set(Some("Starting scrape...".into()));
        spawn_local(async move {
            match bridge::trigger_scrape(&stats.jurisdiction, force).await {
                Ok(task) => {
                    task_note.set(Some(format!("Scrape started: {}", task.task_id)));
                    last_task.set(Some(task.task_id));
                }
                Err(e) => {
                    task_note.set(Some("Failed to start scrape".into()));
                    notice.set(Some(Notice::error(format!("Failed to trigger scrape: {e}"))));
                }
            }
        });
    };

    let check_task = move || {
        let Some(task_id) = last_task.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match bridge::fetch_task(&task_id).await {
                Ok(status) => task_note.set(Some(format!(
                    "Task {}: {}{}",
                    status.task_id,
                    status.state.as_str(),
                    status
                        .detail
                        .map(|d| format!(" ({d})"))
                        .unwrap_or_default()
                ))),
                Err(e) => notice.set(Some(Notice::error(format!(
                    "Failed to fetch task status: {e}"
                )))),
            }
        });
    };

    view! {
      <section class="panel">
        <h2>"Pipeline Dashboard"</h2>
        <div class="row">
          <select on:change=move |ev| selected.set(Some(event_target_value(&ev)))>
            <For
              each=move || jurisdictions.get()
              key=|j| j.id.clone()
              children=move |j| {
                let id = j.id.clone();
                view! {
                  <option value=id.clone() selected=move || selected.get() == Some(id.clone())>
                    {j.name.clone()}
                  </option>
                }
              }
            />
          </select>
          <button on:click=move |_| {
            if let Some(id) = selected.get_untracked() {
                load_stats(id);
            }
          }>"Refresh"</button>
          <button on:click=move |_| scrape(false)>"Run Scraper"</button>
          <button on:click=move |_| scrape(true)>"Force Rescrape"</button>
        </div>

        <Show when=move || notice.get().is_some() fallback=|| ()>
          <div class=move || notice.get().map(|n| n.class()).unwrap_or("notice")>
            {move || notice.get().map(|n| n.message).unwrap_or_default()}
          </div>
        </Show>

        <Show when=move || task_note.get().is_some() fallback=|| ()>
          <div class="notice">
            {move || task_note.get().unwrap_or_default()}
            <Show when=move || last_task.get().is_some() fallback=|| ()>
              <button on:click=move |_| check_task()>"Check Status"</button>
            </Show>
          </div>
        </Show>

        <Show
          when=move || !loading.get()
          fallback=|| view! { <p class="meta">"Loading stats..."</p> }
        >
          {move || {
              stats.get().map(|s| {
                  let health = s.pipeline_status;
                  let last_scrape = s.last_scrape.clone().unwrap_or_else(|| "Never".into());
                  let alerts = s.active_alerts.clone();
                  let alert_block = (!alerts.is_empty()).then(move || {
                      view! {
                        <div class="notice error">
                          <b>"Active Alerts"</b>
                          <ul>
                            <For
                              each=move || alerts.clone()
                              key=|a| a.clone()
                              children=|a| view! { <li>{a}</li> }
                            />
                          </ul>
                        </div>
                      }
                  });
                  view! {
                    <div class="stack">
                      <p>
                        <b>{s.jurisdiction.clone()}</b>
                        " "
                        <span class=if health.is_healthy() { "badge ok" } else { "badge warn" }>
                          {health.as_str().to_uppercase()}
                        </span>
                        " "
                        <span class="meta">{format!("Last scrape: {last_scrape}")}</span>
                      </p>
                      <ul class="row">
                        <li><b>{s.total_raw_scrapes}</b> " raw scrapes"</li>
                        <li><b>{s.processed_scrapes}</b> " processed"</li>
                        <li><b>{s.total_bills}</b> " bills analyzed"</li>
                      </ul>
                      {alert_block}
                    </div>
                  }
              })
          }}
        </Show>
      </section>
    }
}
