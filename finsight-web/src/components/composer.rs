use web_sys::HtmlTextAreaElement;
use yew::{Callback, Html, Properties, TargetCast, classes, function_component, html};

#[derive(Properties, PartialEq, Clone)]
pub struct ComposerProps {
    pub text: String,
    pub on_text_change: Callback<String>,
    pub on_submit: Callback<()>,
    /// Set while a send is in flight; blocks further sends.
    #[prop_or(false)]
    pub disabled: bool,
    /// Opens the document upload dialog.
    pub on_upload: Callback<()>,
}

#[function_component(Composer)]
pub fn composer(props: &ComposerProps) -> Html {
    let on_change = {
        let on_text_change = props.on_text_change.clone();
        Callback::from(move |event: yew::events::InputEvent| {
            let target: HtmlTextAreaElement = event.target_unchecked_into();
            on_text_change.emit(target.value());
        })
    };

    let on_keydown = {
        let on_submit = props.on_submit.clone();
        let disabled = props.disabled;
        Callback::from(move |event: yew::events::KeyboardEvent| {
            if event.key() == "Enter" && !event.shift_key() && !disabled {
                event.prevent_default();
                on_submit.emit(());
            }
        })
    };

    let on_send_click = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |_| on_submit.emit(()))
    };

    let on_upload_click = {
        let on_upload = props.on_upload.clone();
        Callback::from(move |_| on_upload.emit(()))
    };

    html! {
        <div class="border-t border-gray-200 bg-white p-4">
            <div class="max-w-4xl mx-auto flex items-center gap-2">
                <button
                    class="p-2 text-gray-400 hover:text-gray-600 rounded-lg hover:bg-gray-100"
                    type="button"
                    title="Upload document"
                    onclick={on_upload_click}
                >
                    {"📄"}
                </button>
                <div class="flex-1 relative">
                    <textarea
                        class={classes!(
                            "w-full", "p-3", "pr-12", "border", "border-gray-200",
                            "rounded-lg", "resize-none", "min-h-[44px]", "max-h-[200px]"
                        )}
                        placeholder="Ask a question about the financial statement..."
                        value={props.text.clone()}
                        oninput={on_change}
                        onkeydown={on_keydown}
                        disabled={props.disabled}
                        rows="1"
                    />
                    <button
                        class="absolute right-2 top-1/2 -translate-y-1/2 p-2 bg-blue-500 hover:bg-blue-600 text-white rounded-lg disabled:opacity-50"
                        type="button"
                        disabled={props.disabled || props.text.trim().is_empty()}
                        onclick={on_send_click}
                    >
                        {"Send"}
                    </button>
                </div>
            </div>
        </div>
    }
}
