use crate::bridge;
use crate::notice::Notice;
use console_core::sources::{filter_sources, NewSource, ScrapeMethod, Source, SourceKind};
use leptos::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn SourceManager() -> impl IntoView {
    let sources = create_rw_signal(Vec::<Source>::new());
    let loading = create_rw_signal(false);
    let filter = create_rw_signal(String::new());
    let show_add_form = create_rw_signal(false);
    let notice = create_rw_signal(None::<Notice>);

    let draft_url = create_rw_signal(String::new());
    let draft_kind = create_rw_signal(SourceKind::Html.as_str().to_string());
    let draft_method = create_rw_signal(ScrapeMethod::Scrapy.as_str().to_string());

    let load_sources = move || {
        loading.set(true);
        spawn_local(async move {
            match bridge::fetch_sources().await {
                Ok(list) => {
                    sources.set(list);
                    notice.set(None);
                }
                Err(e) => notice.set(Some(Notice::error(format!("Failed to load sources: {e}")))),
            }
            loading.set(false);
        });
    };

    load_sources();

    let delete = move |id: String| {
        spawn_local(async move {
            match bridge::delete_source(&id).await {
                Ok(()) => load_sources(),
                Err(e) => notice.set(Some(Notice::error(format!("Failed to delete source: {e}")))),
            }
        });
    };

    let add_source = move || {
        let draft = NewSource {
            url: draft_url.get_untracked().trim().to_string(),
            kind: SourceKind::parse(&draft_kind.get_untracked()).unwrap_or(SourceKind::Html),
            source_method: ScrapeMethod::parse(&draft_method.get_untracked())
                .unwrap_or(ScrapeMethod::Scrapy),
        };
        if let Err(e) = draft.validate() {
            notice.set(Some(Notice::error(e)));
            return;
        }
        spawn_local(async move {
            match bridge::create_source(&draft).await {
                Ok(()) => {
                    draft_url.set(String::new());
                    show_add_form.set(false);
                    load_sources();
                }
                Err(e) => notice.set(Some(Notice::error(format!("Failed to add source: {e}")))),
            }
        });
    };

    let visible = move || {
        let all = sources.get();
        let needle = filter.get();
        filter_sources(&all, &needle)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    };

    view! {
      <section class="panel">
        <h2>"Source Management"</h2>
        <div class="row">
          <button on:click=move |_| load_sources()>"Refresh"</button>
          <button on:click=move |_| show_add_form.update(|v| *v = !*v)>"Add Source"</button>
          <input
            prop:value=move || filter.get()
            on:input=move |ev| filter.set(event_target_value(&ev))
            placeholder="Filter sources..."
          />
        </div>

        <Show when=move || notice.get().is_some() fallback=|| ()>
          <div class=move || notice.get().map(|n| n.class()).unwrap_or("notice")>
            {move || notice.get().map(|n| n.message).unwrap_or_default()}
          </div>
        </Show>

        <Show when=move || show_add_form.get() fallback=|| ()>
          <div class="stack">
            <input
              prop:value=move || draft_url.get()
              on:input=move |ev| draft_url.set(event_target_value(&ev))
              placeholder="Source URL"
            />
            <select
              prop:value=move || draft_kind.get()
              on:change=move |ev| draft_kind.set(event_target_value(&ev))
            >
              <For
                each=|| SourceKind::ALL
                key=|k| k.as_str()
                children=|k| view! { <option value=k.as_str()>{k.as_str()}</option> }
              />
            </select>
            <select
              prop:value=move || draft_method.get()
              on:change=move |ev| draft_method.set(event_target_value(&ev))
            >
              <For
                each=|| ScrapeMethod::ALL
                key=|m| m.as_str()
                children=|m| view! { <option value=m.as_str()>{m.as_str()}</option> }
              />
            </select>
            <button on:click=move |_| add_source()>"Create"</button>
          </div>
        </Show>

        <Show
          when=move || !loading.get()
          fallback=|| view! { <p class="meta">"Loading sources..."</p> }
        >
          <Show
            when=move || !visible().is_empty()
            fallback=|| view! { <p class="meta">"No sources found"</p> }
          >
            <table>
              <thead>
                <tr>
                  <th>"URL"</th>
                  <th>"Type"</th>
                  <th>"Method"</th>
                  <th>"Status"</th>
                  <th>"Last Scraped"</th>
                  <th>"Actions"</th>
                </tr>
              </thead>
              <tbody>
                <For
                  each=visible
                  key=|s| s.id.clone()
                  children=move |s| {
                    let id = s.id.clone();
                    view! {
                      <tr>
                        <td>{s.url.clone()}</td>
                        <td><span class="badge">{s.kind.as_str()}</span></td>
                        <td>{s.source_method.as_str()}</td>
                        <td><span class="badge">{s.status.as_str()}</span></td>
                        <td class="meta">
                          {s.last_scraped_at.clone().unwrap_or_else(|| "Never".into())}
                        </td>
                        <td>
                          <button on:click=move |_| delete(id.clone())>"Delete"</button>
                        </td>
                      </tr>
                    }
                  }
                />
              </tbody>
            </table>
          </Show>
        </Show>
      </section>
    }
}
