use yew::{html, Children, Component, Context, Html, Properties};

/// Responsive card grid used by the dashboard.
#[derive(Properties, PartialEq)]
pub struct WorkspaceGridProps {
    /// Number of columns on wide screens; narrow screens collapse to one.
    pub columns: usize,
    pub children: Children,
}

pub struct WorkspaceGrid;

impl Component for WorkspaceGrid {
    type Message = ();
    type Properties = WorkspaceGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        WorkspaceGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat(auto-fit, minmax(max(180px, calc(100% / {} - 16px)), 1fr));
             gap: 16px;
             margin-bottom: 24px;",
            props.columns.max(1)
        );

        html! {
            <div class="workspace-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
