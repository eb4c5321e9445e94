use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct CardGridProps {
    /// Minimum card width in pixels; the grid fits as many columns as it can.
    #[prop_or(320)]
    pub min_width: u32,
    #[prop_or_default]
    pub class: String,
    pub children: Children,
}

/// Responsive grid used for result sections and saved campaign cards.
pub struct CardGrid;

impl Component for CardGrid {
    type Message = ();
    type Properties = CardGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CardGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat(auto-fill, minmax({}px, 1fr));
             gap: 20px;
             align-items: start;",
            props.min_width
        );

        html! {
            <div class={props.class.clone()} style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
