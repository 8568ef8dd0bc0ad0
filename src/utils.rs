/// Generates the list (`GET ""`) and create (`POST ""`) handlers of a
/// `ResourcePage` scope, rendered through `$view`.
#[macro_export]
macro_rules! resource_funcs {
    ( $( ( $func_name:ident, $resource:ty, $view:path ) ),+ $(,)? ) => {
        $(
            paste::paste! {
                #[get("")]
                async fn [<$func_name _list>](
                    backends: web::Data<Backends>,
                    query: web::Query<PageQuery>,
                ) -> impl Responder {
                    let mut page = ResourcePage::<$resource>::new(&$crate::utils::today());
                    page.mount(backends.pages.as_ref()).await;
                    if query.new {
                        page.open_form();
                    }
                    render($view(&page))
                }

                #[post("")]
                async fn [<$func_name _create>](
                    backends: web::Data<Backends>,
                    form: web::Form<<$resource as Resource>::Form>,
                ) -> impl Responder {
                    let today = $crate::utils::today();
                    let mut page = ResourcePage::<$resource>::new(&today);
                    page.open_form();
                    page.form = form.into_inner();
                    page.submit(backends.pages.as_ref(), &today).await;
                    if page.loading {
                        page.refresh(backends.pages.as_ref()).await;
                    }
                    render($view(&page))
                }
            }
        )+
    };
}

use chrono::{DateTime, Utc};

const DATE_FMT: &str = "%Y-%m-%d";

pub fn today() -> String {
    format_date(&Utc::now())
}

pub fn format_date(time: &DateTime<Utc>) -> String {
    time.format(DATE_FMT).to_string()
}
