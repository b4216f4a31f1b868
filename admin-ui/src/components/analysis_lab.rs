use crate::bridge;
use crate::notice::Notice;
use console_core::pipeline::{AnalysisRequest, AnalysisStep, Jurisdiction, TaskState};
use leptos::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug, PartialEq)]
struct TaskRow {
    task_id: String,
    jurisdiction: String,
    bill_id: String,
    step: AnalysisStep,
    state: TaskState,
    detail: Option<String>,
}

#[component]
pub fn AnalysisLab() -> impl IntoView {
    let jurisdictions = create_rw_signal(Vec::<Jurisdiction>::new());
    let jurisdiction = create_rw_signal(String::new());
    let bill_id = create_rw_signal(String::new());
    let step = create_rw_signal(AnalysisStep::Research.as_str().to_string());
    let model_override = create_rw_signal(String::new());
    let running = create_rw_signal(false);
    let tasks = create_rw_signal(Vec::<TaskRow>::new());
    let notice = create_rw_signal(None::<Notice>);

    spawn_local(async move {
        match bridge::fetch_jurisdictions().await {
            Ok(list) => {
                if jurisdiction.get_untracked().is_empty() {
                    if let Some(first) = list.first() {
                        jurisdiction.set(first.id.clone());
                    }
                }
                jurisdictions.set(list);
            }
            Err(e) => notice.set(Some(Notice::error(format!(
                "Failed to load jurisdictions: {e}"
            )))),
        }
    });

    let run = move || {
        if running.get_untracked() {
            return;
        }
        let override_text = model_override.get_untracked().trim().to_string();
        let request = AnalysisRequest {
            jurisdiction: jurisdiction.get_untracked(),
            bill_id: bill_id.get_untracked().trim().to_string(),
            step: AnalysisStep::parse(&step.get_untracked()).unwrap_or(AnalysisStep::Research),
            model_override: (!override_text.is_empty()).then_some(override_text),
        };
        if let Err(e) = request.validate() {
            notice.set(Some(Notice::error(e)));
            return;
        }
        running.set(true);
        notice.set(None);
        spawn_local(async move {
            match bridge::run_analysis(&request).await {
                Ok(task) => {
                    tasks.update(|rows| {
                        rows.insert(
                            0,
                            TaskRow {
                                task_id: task.task_id,
                                jurisdiction: request.jurisdiction.clone(),
                                bill_id: request.bill_id.clone(),
                                step: request.step,
                                state: TaskState::Started,
                                detail: None,
                            },
                        );
                    });
                    notice.set(Some(Notice::success(format!(
                        "Running {} analysis for {}",
                        request.step.as_str(),
                        request.bill_id
                    ))));
                    bill_id.set(String::new());
                    model_override.set(String::new());
                }
                Err(e) => notice.set(Some(Notice::error(format!("Failed to run analysis: {e}")))),
            }
            running.set(false);
        });
    };

    let refresh_task = move |task_id: String| {
        spawn_local(async move {
            match bridge::fetch_task(&task_id).await {
                Ok(status) => tasks.update(|rows| {
                    if let Some(row) = rows.iter_mut().find(|r| r.task_id == status.task_id) {
                        row.state = status.state;
                        row.detail = status.detail;
                    }
                }),
                Err(e) => notice.set(Some(Notice::error(format!(
                    "Failed to fetch task status: {e}"
                )))),
            }
        });
    };

    view! {
      <section class="panel">
        <h2>"Analysis Lab"</h2>

        <Show when=move || notice.get().is_some() fallback=|| ()>
          <div class=move || notice.get().map(|n| n.class()).unwrap_or("notice")>
            {move || notice.get().map(|n| n.message).unwrap_or_default()}
          </div>
        </Show>

        <div class="stack">
          <select on:change=move |ev| jurisdiction.set(event_target_value(&ev))>
            <For
              each=move || jurisdictions.get()
              key=|j| j.id.clone()
              children=move |j| {
                let id = j.id.clone();
                view! {
                  <option value=id.clone() selected=move || jurisdiction.get() == id>
                    {j.name.clone()}
                  </option>
                }
              }
            />
          </select>
          <input
            prop:value=move || bill_id.get()
            on:input=move |ev| bill_id.set(event_target_value(&ev))
            placeholder="Bill ID, e.g. SB-423"
          />
          <select
            prop:value=move || step.get()
            on:change=move |ev| step.set(event_target_value(&ev))
          >
            <For
              each=|| AnalysisStep::ALL
              key=|s| s.as_str()
              children=|s| view! { <option value=s.as_str()>{s.label()}</option> }
            />
          </select>
          <input
            prop:value=move || model_override.get()
            on:input=move |ev| model_override.set(event_target_value(&ev))
            placeholder="Model override (optional)"
          />
          <button disabled=move || running.get() on:click=move |_| run()>
            {move || if running.get() { "Starting..." } else { "Run Analysis" }}
          </button>
        </div>

        <h3>"Tasks"</h3>
        <ul>
          <For
            each=move || tasks.get()
            key=|t| format!("{}:{}", t.task_id, t.state.as_str())
            children=move |t| {
              let task_id = t.task_id.clone();
              let refresh_btn = (!t.state.is_terminal()).then(move || {
                  view! {
                    <button on:click=move |_| refresh_task(task_id.clone())>"Refresh"</button>
                  }
              });
              view! {
                <li>
                  <div>
                    <b>{t.bill_id.clone()}</b>
                    " "
                    <span class="meta">{format!("({} / {})", t.jurisdiction, t.step.as_str())}</span>
                  </div>
                  <div>
                    <span class=if t.state == TaskState::Failed { "badge warn" } else { "badge" }>
                      {t.state.as_str()}
                    </span>
                    " "
                    <span class="meta">{t.detail.clone().unwrap_or_default()}</span>
                    {refresh_btn}
                  </div>
                </li>
              }
            }
          />
        </ul>
      </section>
    }
}
