use crate::bridge;
use crate::notice::Notice;
use console_core::models::{ModelDraft, Provider, UseCase};
use console_core::registry::ModelStaging;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn ModelRegistry() -> impl IntoView {
    let staging = create_rw_signal(ModelStaging::default());
    let loading = create_rw_signal(false);
    let saving = create_rw_signal(false);
    let show_add_form = create_rw_signal(false);
    let notice = create_rw_signal(None::<Notice>);

    let draft_provider = create_rw_signal(Provider::OpenRouter.as_str().to_string());
    let draft_name = create_rw_signal(String::new());
    let draft_use_case = create_rw_signal(UseCase::Generation.as_str().to_string());
    let draft_enabled = create_rw_signal(true);

    let load_models = move || {
        loading.set(true);
        spawn_local(async move {
            match bridge::fetch_models().await {
                Ok(models) => {
                    staging.update(|s| s.load(models));
                    notice.set(None);
                }
                Err(e) => notice.set(Some(Notice::error(format!("Failed to load models: {e}")))),
            }
            loading.set(false);
        });
    };

    load_models();

    // The whole staged collection goes up in one request; the reloaded
    // snapshot is authoritative on success, local state untouched on failure.
    let save_models = move || {
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        notice.set(None);
        let snapshot = staging.get_untracked().snapshot();
        spawn_local(async move {
            match bridge::save_models(&snapshot).await {
                Ok(()) => match bridge::fetch_models().await {
                    Ok(models) => {
                        staging.update(|s| s.load(models));
                        notice.set(Some(Notice::success("Model configuration saved")));
                    }
                    Err(e) => {
                        notice.set(Some(Notice::error(format!("Saved, but reload failed: {e}"))))
                    }
                },
                Err(e) => notice.set(Some(Notice::error(format!("Failed to save models: {e}")))),
            }
            saving.set(false);
        });
    };

    let add_model = move || {
        let draft = ModelDraft {
            provider: Provider::parse(&draft_provider.get_untracked())
                .unwrap_or(Provider::OpenRouter),
            model_name: draft_name.get_untracked(),
            enabled: draft_enabled.get_untracked(),
            use_case: UseCase::parse(&draft_use_case.get_untracked())
                .unwrap_or(UseCase::Generation),
        };
        let mut staged = Ok(());
        staging.update(|s| staged = s.add(draft));
        match staged {
            Ok(()) => {
                show_add_form.set(false);
                draft_name.set(String::new());
                notice.set(Some(Notice::success("Model staged. Save to persist changes.")));
            }
            Err(e) => notice.set(Some(Notice::error(e))),
        }
    };

    view! {
      <section class="panel">
        <h2>"Model Configuration"</h2>
        <p class="meta">"Lowest priority value wins when the backend selects a model."</p>
        <div class="row">
          <button on:click=move |_| load_models()>"Refresh"</button>
          <button on:click=move |_| show_add_form.update(|v| *v = !*v)>"Add Model"</button>
          <button disabled=move || saving.get() on:click=move |_| save_models()>
            {move || if saving.get() { "Saving..." } else { "Save Changes" }}
          </button>
        </div>

        <Show when=move || notice.get().is_some() fallback=|| ()>
          <div class=move || notice.get().map(|n| n.class()).unwrap_or("notice")>
            {move || notice.get().map(|n| n.message).unwrap_or_default()}
          </div>
        </Show>

        <Show when=move || show_add_form.get() fallback=|| ()>
          <div class="stack">
            <select
              prop:value=move || draft_provider.get()
              on:change=move |ev| draft_provider.set(event_target_value(&ev))
            >
              <For
                each=|| Provider::ALL
                key=|p| p.as_str()
                children=|p| view! { <option value=p.as_str()>{p.label()}</option> }
              />
            </select>
            <input
              prop:value=move || draft_name.get()
              on:input=move |ev| draft_name.set(event_target_value(&ev))
              placeholder="Model name, e.g. x-ai/grok-beta"
            />
            <select
              prop:value=move || draft_use_case.get()
              on:change=move |ev| draft_use_case.set(event_target_value(&ev))
            >
              <For
                each=|| UseCase::ALL
                key=|u| u.as_str()
                children=|u| view! { <option value=u.as_str()>{u.label()}</option> }
              />
            </select>
            <label>
              <input
                type="checkbox"
                prop:checked=move || draft_enabled.get()
                on:change=move |ev| draft_enabled.set(event_target_checked(&ev))
              />
              "Enabled"
            </label>
            <button on:click=move |_| add_model()>"Stage Model"</button>
          </div>
        </Show>

        <Show
          when=move || !loading.get()
          fallback=|| view! { <p class="meta">"Loading models..."</p> }
        >
          <Show
            when=move || !staging.get().is_empty()
            fallback=|| view! { <p class="meta">"No models configured"</p> }
          >
            <table>
              <thead>
                <tr>
                  <th>"Priority"</th>
                  <th>"Provider"</th>
                  <th>"Model"</th>
                  <th>"Use Case"</th>
                  <th>"Status"</th>
                  <th>"Move"</th>
                </tr>
              </thead>
              <tbody>
                <For
                  each={move || staging.get().snapshot().into_iter().enumerate().collect::<Vec<_>>()}
                  key=|(_, m)| format!("{}:{}:{}", m.model_name, m.priority, m.enabled)
                  children=move |(i, m)| {
                    view! {
                      <tr>
                        <td>{m.priority}</td>
                        <td>{m.provider.label()}</td>
                        <td>{m.model_name.clone()}</td>
                        <td><span class="badge">{m.use_case.label()}</span></td>
                        <td>
                          <label>
                            <input
                              type="checkbox"
                              prop:checked=m.enabled
                              on:change=move |_| staging.update(|s| s.toggle_enabled(i))
                            />
                            {if m.enabled { "Enabled" } else { "Disabled" }}
                          </label>
                        </td>
                        <td>
                          <button
                            disabled={i == 0}
                            on:click=move |_| staging.update(|s| s.move_up(i))
                          >"▲"</button>
                          <button
                            disabled=move || i + 1 == staging.with(|s| s.len())
                            on:click=move |_| staging.update(|s| s.move_down(i))
                          >"▼"</button>
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
