use crate::components::analysis_lab::AnalysisLab;
use crate::components::dashboard::Dashboard;
use crate::components::model_registry::ModelRegistry;
use crate::components::prompt_editor::PromptEditor;
use crate::components::sources::SourceManager;
use leptos::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Screen {
    Dashboard,
    Sources,
    Models,
    Prompts,
    Analysis,
}

impl Screen {
    const ALL: [Screen; 5] = [
        Screen::Dashboard,
        Screen::Sources,
        Screen::Models,
        Screen::Prompts,
        Screen::Analysis,
    ];

    fn label(self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::Sources => "Sources",
            Screen::Models => "Model Registry",
            Screen::Prompts => "Prompts",
            Screen::Analysis => "Analysis Lab",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let screen = create_rw_signal(Screen::Dashboard);

    view! {
      <div class="layout">
        <nav class="row">
          <For
            each=|| Screen::ALL
            key=|s| s.label()
            children=move |s| {
              view! {
                <button
                  class=move || if screen.get() == s { "tab active" } else { "tab" }
                  on:click=move |_| screen.set(s)
                >
                  {s.label()}
                </button>
              }
            }
          />
        </nav>
        {move || match screen.get() {
            Screen::Dashboard => view! { <Dashboard/> }.into_view(),
            Screen::Sources => view! { <SourceManager/> }.into_view(),
            Screen::Models => view! { <ModelRegistry/> }.into_view(),
            Screen::Prompts => view! { <PromptEditor/> }.into_view(),
            Screen::Analysis => view! { <AnalysisLab/> }.into_view(),
        }}
      </div>
    }
}
