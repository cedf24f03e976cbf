use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct TypingIndicatorProps {
    #[prop_or(false)]
    pub active: bool,
}

#[function_component(TypingIndicator)]
pub fn typing_indicator(props: &TypingIndicatorProps) -> Html {
    if !props.active {
        return Html::default();
    }

    html! {
        <div class="flex justify-start">
            <div class="bg-white rounded-2xl px-4 py-2 shadow-sm">
                <div class="flex space-x-2">
                    <div class="w-2 h-2 bg-gray-400 rounded-full animate-bounce" />
                    <div class="w-2 h-2 bg-gray-400 rounded-full animate-bounce delay-100" />
                    <div class="w-2 h-2 bg-gray-400 rounded-full animate-bounce delay-200" />
                </div>
            </div>
        </div>
    }
}
