use actix_web::{web, App, HttpResponse, HttpServer};
use chrono::Utc;
use std::net::TcpListener;
use std::sync::Mutex;
use userpanel_api_structs::dtos::{ContactDTO, UserDTO};
use userpanel_api_structs::{
    create_contact, create_user, delete_contact, delete_user, update_contact, update_user,
};
use userpanel_domain::ID;

/// In-memory stand-in for the hosted mock collection. Ids are handed out by
/// the store, never by the callers.
#[derive(Default)]
pub struct CollectionStore {
    users: Vec<UserDTO>,
    contacts: Vec<ContactDTO>,
    id_counter: usize,
}

impl CollectionStore {
    fn next_id(&mut self) -> ID {
        self.id_counter += 1;
        self.id_counter.to_string().parse().expect("A valid id")
    }
}

type Store = web::Data<Mutex<CollectionStore>>;

async fn list_users(store: Store) -> HttpResponse {
    let store = store.lock().unwrap();
    HttpResponse::Ok().json(&store.users)
}

async fn create_user_handler(
    store: Store,
    body: web::Json<create_user::RequestBody>,
) -> HttpResponse {
    let mut store = store.lock().unwrap();
    let id = store.next_id();
    let body = body.into_inner();
    let user = UserDTO {
        id,
        nome: body.nome,
        email: body.email,
        cargo: body.cargo,
        status: body.status,
        created_at: Some(Utc::now()),
    };
    store.users.push(user.clone());
    HttpResponse::Created().json(user)
}

async fn update_user_handler(
    store: Store,
    path: web::Path<update_user::PathParams>,
    body: web::Json<update_user::RequestBody>,
) -> HttpResponse {
    let mut store = store.lock().unwrap();
    let params = path.into_inner();
    let body = body.into_inner();
    match store.users.iter_mut().find(|u| u.id == params.user_id) {
        Some(user) => {
            user.nome = body.nome;
            user.email = body.email;
            user.cargo = body.cargo;
            user.status = body.status;
            HttpResponse::Ok().json(user.clone())
        }
        None => HttpResponse::NotFound().body("No user with that id"),
    }
}

async fn delete_user_handler(
    store: Store,
    path: web::Path<delete_user::PathParams>,
) -> HttpResponse {
    let mut store = store.lock().unwrap();
    let params = path.into_inner();
    match store.users.iter().position(|u| u.id == params.user_id) {
        Some(position) => {
            let removed = store.users.remove(position);
            HttpResponse::Ok().json(removed)
        }
        None => HttpResponse::NotFound().body("No user with that id"),
    }
}

async fn list_contacts(store: Store) -> HttpResponse {
    let store = store.lock().unwrap();
    HttpResponse::Ok().json(&store.contacts)
}

async fn create_contact_handler(
    store: Store,
    body: web::Json<create_contact::RequestBody>,
) -> HttpResponse {
    let mut store = store.lock().unwrap();
    let id = store.next_id();
    let body = body.into_inner();
    let contact = ContactDTO {
        id,
        name: body.name,
        age: body.age,
        email: body.email,
        address: body.address,
        cell_number: body.cell_number,
    };
    store.contacts.push(contact.clone());
    HttpResponse::Created().json(contact)
}

async fn update_contact_handler(
    store: Store,
    path: web::Path<update_contact::PathParams>,
    body: web::Json<update_contact::RequestBody>,
) -> HttpResponse {
    let mut store = store.lock().unwrap();
    let params = path.into_inner();
    let body = body.into_inner();
    match store.contacts.iter_mut().find(|c| c.id == params.contact_id) {
        Some(contact) => {
            contact.name = body.name;
            contact.age = body.age;
            contact.email = body.email;
            contact.address = body.address;
            contact.cell_number = body.cell_number;
            HttpResponse::Ok().json(contact.clone())
        }
        None => HttpResponse::NotFound().body("No contact with that id"),
    }
}

async fn delete_contact_handler(
    store: Store,
    path: web::Path<delete_contact::PathParams>,
) -> HttpResponse {
    let mut store = store.lock().unwrap();
    let params = path.into_inner();
    match store.contacts.iter().position(|c| c.id == params.contact_id) {
        Some(position) => {
            let removed = store.contacts.remove(position);
            HttpResponse::Ok().json(removed)
        }
        None => HttpResponse::NotFound().body("No contact with that id"),
    }
}

fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/users", web::get().to(list_users));
    cfg.route("/users", web::post().to(create_user_handler));
    cfg.route("/users/{user_id}", web::put().to(update_user_handler));
    cfg.route("/users/{user_id}", web::delete().to(delete_user_handler));

    cfg.route("/contacts", web::get().to(list_contacts));
    cfg.route("/contacts", web::post().to(create_contact_handler));
    cfg.route("/contacts/{contact_id}", web::put().to(update_contact_handler));
    cfg.route(
        "/contacts/{contact_id}",
        web::delete().to(delete_contact_handler),
    );
}

/// Binds a random port, launches the mock collection as a background task
/// and returns its base address.
pub fn spawn_collection_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind a random port");
    let port = listener.local_addr().unwrap().port();

    let store: Store = web::Data::new(Mutex::new(CollectionStore::default()));
    let server = HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .service(web::scope("/api/v1").configure(configure_routes))
    })
    .listen(listener)
    .expect("Failed to listen on the bound port")
    .workers(1)
    .run();

    let _ = actix_web::rt::spawn(async move {
        server.await.expect("Expected the mock collection to run");
    });

    format!("http://127.0.0.1:{}/api/v1", port)
}
