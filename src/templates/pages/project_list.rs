use crate::domain::{Notice, Project};
use crate::routes::Route;
use crate::templates::{
    components::{detail_row, notice_box},
    format::format_cad,
    mobile_layout,
};
use maud::{html, Markup};

pub struct ProjectListVm<'a> {
    pub query: &'a str,
    pub projects: Vec<&'a Project>,
    pub load_error: Option<&'a str>,
}

pub fn project_list_page(vm: &ProjectListVm) -> Markup {
    mobile_layout(
        "Road Projects",
        None,
        html! {
            form method="get" action="/projects" role="search" {
                input
                    type="search"
                    name="q"
                    value=(vm.query)
                    placeholder="Search projects, locations, or contractors..."
                    aria-label="Search projects"
                    aria-description="Enter text to search for projects by name, location, or contractor";
            }

            @if let Some(err) = vm.load_error {
                (notice_box(&Notice::new("Error", err), true))
            }

            @if vm.projects.is_empty() {
                p class="empty" {
                    @if vm.query.trim().is_empty() {
                        "No projects available"
                    } @else {
                        "No projects found matching your search"
                    }
                }
            } @else {
                @for project in &vm.projects {
                    (project_item(project))
                }
            }
        },
    )
}

fn project_item(project: &Project) -> Markup {
    let amount = format_cad(project.contract_amount);
    let label = format!(
        "Project: {}. Location: {}. Contract amount: {}. Tap for details",
        project.name, project.location, amount
    );

    html! {
        div class="card" {
            a href=(Route::project_detail(&project.id, None).href()) aria-label=(label) {
                h2 { (project.name) }
                p class="label" { (project.location) }
                (detail_row("Contractor:", &project.contractor))
                (detail_row("Amount:", &amount))
                div class="row" {
                    span class="label" { "Status:" }
                    span class="status" { (project.status.label()) }
                }
            }
        }
    }
}
