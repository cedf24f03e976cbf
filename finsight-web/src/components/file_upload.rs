use js_sys::Uint8Array;
use shared::models::UploadResponse;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{DragEvent, HtmlInputElement};
use yew::{
    Callback, Html, NodeRef, Properties, TargetCast, classes, function_component, html, use_node_ref,
    use_state,
};

use crate::api::FinsightClient;
use crate::state::{UploadCandidate, UploadPhase};

#[derive(Properties, PartialEq)]
pub struct FileUploadProps {
    /// Fired once the backend has ingested the document.
    pub on_complete: Callback<UploadResponse>,
    /// Fired on validation or submission failure.
    pub on_error: Callback<String>,
}

fn reset_input(input_ref: &NodeRef) {
    if let Some(input) = input_ref.cast::<HtmlInputElement>() {
        input.set_value("");
    }
}

#[function_component(FileUpload)]
pub fn file_upload(props: &FileUploadProps) -> Html {
    let phase = use_state(UploadPhase::default);
    let file_blob = use_state(|| None::<web_sys::File>);
    let input_ref = use_node_ref();

    // Shared acceptance path: browse and drag-and-drop validate identically.
    let accept_file = {
        let phase = phase.clone();
        let file_blob = file_blob.clone();
        let input_ref = input_ref.clone();
        let on_error = props.on_error.clone();
        Callback::from(move |file: web_sys::File| {
            if phase.is_uploading() {
                return;
            }
            match UploadCandidate::validate(&file.name(), &file.type_(), file.size() as u64) {
                Ok(candidate) => {
                    phase.set(UploadPhase::select(candidate));
                    file_blob.set(Some(file));
                }
                Err(err) => {
                    // A rejected file clears the flow entirely.
                    phase.set(UploadPhase::default());
                    file_blob.set(None);
                    reset_input(&input_ref);
                    on_error.emit(err.to_string());
                }
            }
        })
    };

    let on_browse = {
        let input_ref = input_ref.clone();
        let has_file = phase.candidate().is_some();
        Callback::from(move |_| {
            if !has_file {
                if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                    input.click();
                }
            }
        })
    };

    let on_file_select = {
        let accept_file = accept_file.clone();
        Callback::from(move |event: yew::events::Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                accept_file.emit(file);
            }
        })
    };

    let on_drag_over = Callback::from(|event: DragEvent| {
        event.prevent_default();
        event.stop_propagation();
    });

    let on_drop = {
        let accept_file = accept_file;
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            event.stop_propagation();
            let dropped = event
                .data_transfer()
                .and_then(|transfer| transfer.files())
                .and_then(|files| files.get(0));
            if let Some(file) = dropped {
                accept_file.emit(file);
            }
        })
    };

    let on_remove = {
        let phase = phase.clone();
        let file_blob = file_blob.clone();
        let input_ref = input_ref.clone();
        Callback::from(move |event: yew::MouseEvent| {
            event.stop_propagation();
            phase.set((*phase).clone().clear());
            file_blob.set(None);
            reset_input(&input_ref);
        })
    };

    let on_upload = {
        let phase = phase.clone();
        let file_blob = file_blob.clone();
        let input_ref = input_ref.clone();
        let on_complete = props.on_complete.clone();
        let on_error = props.on_error.clone();
        Callback::from(move |_: yew::MouseEvent| {
            let Some(uploading) = (*phase).clone().begin() else {
                return;
            };
            let Some(file) = (*file_blob).clone() else {
                return;
            };
            phase.set(uploading.clone());

            let phase = phase.clone();
            let file_blob = file_blob.clone();
            let input_ref = input_ref.clone();
            let on_complete = on_complete.clone();
            let on_error = on_error.clone();
            spawn_local(async move {
                let buffer = match JsFuture::from(file.array_buffer()).await {
                    Ok(value) => value,
                    Err(_) => {
                        phase.set(uploading.clone().fail());
                        on_error.emit("Failed to read the selected file".to_string());
                        return;
                    }
                };
                let bytes = Uint8Array::new(&buffer).to_vec();

                let client = FinsightClient::shared();
                match client.upload_document(&file.name(), bytes).await {
                    Ok(result) => {
                        phase.set(uploading.clone().succeed());
                        file_blob.set(None);
                        reset_input(&input_ref);
                        on_complete.emit(result);
                    }
                    Err(err) => {
                        // File retained so the user can retry.
                        phase.set(uploading.fail());
                        on_error.emit(format!("Failed to upload document: {err}"));
                    }
                }
            });
        })
    };

    let candidate: Option<UploadCandidate> = phase.candidate().cloned();
    let is_uploading = phase.is_uploading();

    let drop_area_class = if candidate.is_some() {
        classes!(
            "border-2", "border-dashed", "rounded-lg", "p-6", "text-center",
            "border-green-500", "bg-green-50"
        )
    } else {
        classes!(
            "border-2", "border-dashed", "rounded-lg", "p-6", "text-center",
            "border-gray-300", "hover:border-blue-500"
        )
    };

    html! {
        <div class="w-full">
            <div
                class={drop_area_class}
                ondragover={on_drag_over}
                ondrop={on_drop}
                onclick={on_browse}
            >
                { match &candidate {
                    Some(candidate) => html! {
                        <div class="flex items-center justify-between">
                            <div class="text-left">
                                <p class="font-medium text-gray-900">{ candidate.name.clone() }</p>
                                <p class="text-sm text-gray-500">
                                    { format!("{:.2} MB", candidate.size as f64 / 1024.0 / 1024.0) }
                                </p>
                            </div>
                            <button
                                class="p-1 hover:bg-gray-100 rounded-full"
                                type="button"
                                disabled={is_uploading}
                                onclick={on_remove}
                            >
                                {"✕"}
                            </button>
                        </div>
                    },
                    None => html! {
                        <div class="text-gray-500">
                            <p class="text-sm font-medium">{"Drag & Drop your PDF file here"}</p>
                            <p class="text-xs mt-1">{"or click to browse"}</p>
                            <p class="text-xs mt-2 text-gray-400">{"Maximum file size: 10MB"}</p>
                        </div>
                    },
                }}
            </div>

            <input
                ref={input_ref}
                type="file"
                accept=".pdf,application/pdf,application/x-pdf"
                class="hidden"
                onchange={on_file_select}
            />

            { if candidate.is_some() && !is_uploading {
                html! {
                    <div class="mt-4">
                        <button
                            class="w-full px-4 py-2 bg-blue-500 hover:bg-blue-600 text-white rounded-lg font-medium"
                            type="button"
                            onclick={on_upload}
                        >
                            {"Upload PDF"}
                        </button>
                    </div>
                }
            } else if is_uploading {
                html! {
                    <p class="text-center text-xs text-gray-500 mt-4">
                        {"Processing document..."}
                    </p>
                }
            } else {
                html! {}
            }}
        </div>
    }
}
