use actix_web::{middleware::from_fn, web};

use crate::middlewares::{allow_any_origin, cors};
use crate::modules::file_upload::{handle, repository::FileStorage};

pub fn configure<R>(cfg: &mut web::ServiceConfig)
where
    R: FileStorage + Send + Sync + 'static,
{
    cfg.service(
        web::scope("/upload")
            .wrap(cors())
            .wrap(from_fn(allow_any_origin))
            .service(
                web::resource("")
                    .route(web::get().to(handle::health))
                    .route(web::post().to(handle::upload_file::<R>)),
            )
            .service(
                web::resource("/{identifier}").route(web::get().to(handle::get_file::<R>)),
            ),
    );
}
