use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InfoBannerProps {
    pub message: AttrValue,
}

#[function_component(InfoBanner)]
pub fn info_banner(props: &InfoBannerProps) -> Html {
    html! {
        <div class="info-banner" role="note">
            <span class="info-banner-icon">{"⚠"}</span>
            <span class="info-banner-message">{props.message.clone()}</span>
        </div>
    }
}
