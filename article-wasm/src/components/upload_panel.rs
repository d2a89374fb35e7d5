use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::HtmlInputElement;

use crate::api;
use crate::state::AppState;
use crate::upload::{validate_image, validate_non_empty_fields};

const CATEGORIES: [&str; 9] = [
    "Travel", "Food", "Culture", "Sights", "Guides", "Lodging", "Transport", "Shopping", "Other",
];

#[derive(Debug, Clone, PartialEq)]
enum FormMessage {
    Success(String),
    Error(String),
}

/// Форма публикации статьи. Черновик сбрасывается только после успешной
/// отправки; при ошибке бэкенда введённые данные сохраняются.
#[component]
pub(crate) fn UploadPanel(state: AppState) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let body_text = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let image = RwSignal::new_local(None::<web_sys::File>);
    let preview_url = RwSignal::new(None::<String>);
    let image_error = RwSignal::new(None::<String>);
    let message = RwSignal::new(None::<FormMessage>);
    let submitting = RwSignal::new(false);

    let file_input = NodeRef::<html::Input>::new();

    let clear_preview = move || {
        if let Some(url) = preview_url.get_untracked() {
            web_sys::Url::revoke_object_url(&url).ok();
        }
        preview_url.set(None);
    };

    let on_image_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };

        // обе проверки выполняются при выборе файла, а не при отправке;
        // отклонённый файл в черновик не попадает
        if let Err(err) = validate_image(&file.type_(), file.size() as u64) {
            input.set_value("");
            image_error.set(Some(err));
            return;
        }

        clear_preview();
        match web_sys::Url::create_object_url_with_blob(&file) {
            Ok(url) => preview_url.set(Some(url)),
            Err(_) => preview_url.set(None),
        }
        image.set(Some(file));
        image_error.set(None);
        message.set(None);
    };

    let on_remove_image = Callback::new(move |_: ()| {
        clear_preview();
        image.set(None);
        image_error.set(None);
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    });

    let on_submit = {
        let state = state.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();

            let title_value = title.get_untracked();
            let body_value = body_text.get_untracked();
            if let Err(err) = validate_non_empty_fields(
                &title_value,
                &body_value,
                "Заполните заголовок и текст статьи",
            ) {
                message.set(Some(FormMessage::Error(err.to_string())));
                return;
            }

            submitting.set(true);
            message.set(None);

            let state = state.clone();
            spawn_local(async move {
                let token = state.token.get_untracked();
                let file = image.get_untracked();
                let result = api::create_article(
                    token.as_deref(),
                    &title_value,
                    &body_value,
                    &category.get_untracked(),
                    file.as_ref(),
                )
                .await;

                match result {
                    Ok(_) => {
                        title.set(String::new());
                        body_text.set(String::new());
                        category.set(String::new());
                        image.set(None);
                        if let Some(url) = preview_url.get_untracked() {
                            web_sys::Url::revoke_object_url(&url).ok();
                        }
                        preview_url.set(None);
                        image_error.set(None);
                        if let Some(input) = file_input.get_untracked() {
                            input.set_value("");
                        }
                        message.set(Some(FormMessage::Success(
                            "Статья опубликована".to_string(),
                        )));
                    }
                    // черновик сохраняется, чтобы отправку можно было повторить
                    Err(err) => message.set(Some(FormMessage::Error(err.to_string()))),
                }
                submitting.set(false);
            });
        }
    };

    view! {
        <h2>"New article"</h2>

        {move || {
            message
                .get()
                .map(|msg| match msg {
                    FormMessage::Success(text) => {
                        view! { <div class="message success">{text}</div> }.into_any()
                    }
                    FormMessage::Error(text) => {
                        view! { <div class="message error">{text}</div> }.into_any()
                    }
                })
        }}

        <form class="upload-form" on:submit=on_submit>
            <label>"Title"</label>
            <input
                placeholder="Заголовок статьи"
                maxlength="255"
                prop:value=move || title.get()
                on:input=move |ev| title.set(event_target_value(&ev))
            />

            <label>"Category"</label>
            <select
                prop:value=move || category.get()
                on:change=move |ev| category.set(event_target_value(&ev))
            >
                <option value="">"Без категории"</option>
                {CATEGORIES
                    .into_iter()
                    .map(|category| view! { <option value=category>{category}</option> })
                    .collect::<Vec<_>>()}
            </select>

            <label>"Body"</label>
            <textarea
                placeholder="Текст статьи"
                rows="10"
                prop:value=move || body_text.get()
                on:input=move |ev| body_text.set(event_target_value(&ev))
            ></textarea>

            <label>"Image (JPG, PNG, GIF, WebP, до 5 МБ)"</label>
            <input type="file" accept="image/*" node_ref=file_input on:change=on_image_change/>

            <Show when=move || image_error.get().is_some()>
                <p class="field-error">{move || image_error.get().unwrap_or_default()}</p>
            </Show>

            {move || {
                preview_url
                    .get()
                    .map(|url| {
                        view! {
                            <div class="image-preview">
                                <img src=url alt="preview"/>
                                <button type="button" on:click=move |_| on_remove_image.run(())>
                                    "Remove image"
                                </button>
                            </div>
                        }
                    })
            }}

            <button type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Publishing..." } else { "Publish" }}
            </button>
        </form>
    }
}
