use crate::bridge;
use crate::notice::Notice;
use console_core::prompts::{PromptDraft, PromptKind};
use leptos::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn PromptEditor() -> impl IntoView {
    let active_kind = create_rw_signal(PromptKind::Generation);
    let draft = create_rw_signal(PromptDraft::default());
    let loading = create_rw_signal(false);
    let saving = create_rw_signal(false);
    let notice = create_rw_signal(None::<Notice>);

    let load_prompt = move |kind: PromptKind| {
        loading.set(true);
        notice.set(None);
        spawn_local(async move {
            match bridge::fetch_prompt(kind).await {
                Ok(config) => draft.update(|d| d.load(config)),
                Err(e) => notice.set(Some(Notice::error(format!(
                    "Failed to load {} prompt: {e}",
                    kind.as_str()
                )))),
            }
            loading.set(false);
        });
    };

    create_effect(move |_| {
        load_prompt(active_kind.get());
    });

    let save = move || {
        if saving.get_untracked() {
            return;
        }
        let kind = active_kind.get_untracked();
        let payload = match draft.get_untracked().update_payload(kind) {
            Ok(payload) => payload,
            Err(e) => {
                notice.set(Some(Notice::error(e)));
                return;
            }
        };
        saving.set(true);
        notice.set(None);
        spawn_local(async move {
            match bridge::save_prompt(&payload).await {
                Ok(response) => {
                    let version = response
                        .get("version")
                        .and_then(serde_json::Value::as_i64)
                        .map(|v| v.to_string())
                        .unwrap_or_else(|| "new".into());
                    notice.set(Some(Notice::success(format!(
                        "Prompt saved (version {version})"
                    ))));
                    load_prompt(kind);
                }
                Err(e) => notice.set(Some(Notice::error(format!("Failed to save prompt: {e}")))),
            }
            saving.set(false);
        });
    };

    view! {
      <section class="panel">
        <h2>"System Prompt Editor"</h2>
        <div class="row">
          <For
            each=|| PromptKind::ALL
            key=|k| k.as_str()
            children=move |k| {
              view! {
                <button
                  class=move || if active_kind.get() == k { "tab active" } else { "tab" }
                  on:click=move |_| active_kind.set(k)
                >
                  {k.label()}
                </button>
              }
            }
          />
        </div>

        <Show when=move || notice.get().is_some() fallback=|| ()>
          <div class=move || notice.get().map(|n| n.class()).unwrap_or("notice")>
            {move || notice.get().map(|n| n.message).unwrap_or_default()}
          </div>
        </Show>

        {move || {
            draft.get().loaded().map(|config| {
                view! {
                  <p class="meta">
                    <span class="badge">{format!("Version {}", config.version.unwrap_or(1))}</span>
                    " "
                    <span class="badge">{config.updated_by.clone()}</span>
                    " "
                    {format!("updated {}", config.updated_at)}
                  </p>
                }
            })
        }}

        <Show
          when=move || !loading.get()
          fallback=|| view! { <p class="meta">"Loading prompt..."</p> }
        >
          <div class="stack">
            <textarea
              rows=16
              prop:value=move || draft.get().edited().to_string()
              on:input=move |ev| draft.update(|d| d.set_edited(event_target_value(&ev)))
            />
            <div class="row">
              <button
                disabled=move || !draft.get().has_changes()
                on:click=move |_| draft.update(|d| d.reset())
              >
                "Reset"
              </button>
              <button
                disabled=move || saving.get() || !draft.get().has_changes()
                on:click=move |_| save()
              >
                {move || if saving.get() { "Saving..." } else { "Save Prompt" }}
              </button>
            </div>
          </div>
        </Show>
      </section>
    }
}
