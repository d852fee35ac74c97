use actix_session::Session;
use actix_web::HttpResponse;
use actix_web::web;

use crate::db::DbPool;
use crate::errors::{AppError, render};
use crate::templates_structs::{AboutTemplate, LandingTemplate, PageContext};

pub async fn landing(
    pool: web::Data<DbPool>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let ctx = PageContext::build(&session, &conn);
    render(LandingTemplate { ctx })
}

pub async fn about(
    pool: web::Data<DbPool>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let conn = pool.get()?;
    let ctx = PageContext::build(&session, &conn);
    render(AboutTemplate { ctx })
}
