use common::model::product::Product;
use common::pagination::PageQuery;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::products;
use crate::config::PAGE_SIZE;
use crate::helpers::{read_image_data_url, report_failure, show_error, show_toast};

use super::messages::Msg;
use super::state::{ProductForm, ProductsPage};

pub fn update(page: &mut ProductsPage, ctx: &Context<ProductsPage>, msg: Msg) -> bool {
    let props = ctx.props();
    match msg {
        Msg::Load => {
            page.loading = true;
            let query = PageQuery {
                limit: PAGE_SIZE,
                ..PageQuery::page(page.page)
            }
            .with_search(&page.search);
            let api = props.api();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Loaded(products::list(&api, &query).await));
            });
            true
        }
        Msg::Loaded(result) => {
            page.loading = false;
            match result {
                Ok(list) => {
                    page.total = list.total;
                    page.products = list.results;
                }
                Err(e) => report_failure(&e, "Erreur lors du chargement des produits", &props.on_unauthorized),
            }
            true
        }
        Msg::Search(term) => {
            page.search = term;
            page.page = 1;
            ctx.link().send_message(Msg::Load);
            false
        }
        Msg::SetPage(number) => {
            page.page = number;
            ctx.link().send_message(Msg::Load);
            false
        }
        Msg::OpenCreate => {
            page.form = Some(ProductForm::new(Product {
                available: true,
                active: true,
                ..Product::default()
            }));
            true
        }
        Msg::OpenEdit(product) => {
            page.form = Some(ProductForm::new(product));
            true
        }
        Msg::Close => {
            page.form = None;
            page.deleting = None;
            true
        }
        Msg::Edit(field) => {
            if let Some(form) = &mut page.form {
                form.error = None;
                form.apply(field);
            }
            true
        }
        Msg::ImagePicked(file) => {
            let Some(form) = &mut page.form else {
                return false;
            };
            form.reading_image = true;
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::ImageRead(read_image_data_url(file).await));
            });
            true
        }
        Msg::ImageRead(result) => {
            let Some(form) = &mut page.form else {
                return false;
            };
            form.reading_image = false;
            match result {
                Ok(data_url) => form.product.image = Some(data_url),
                Err(e) => show_error(&e),
            }
            true
        }
        Msg::RemoveImage => {
            if let Some(form) = &mut page.form {
                form.product.image = None;
            }
            true
        }
        Msg::Save => {
            let Some(form) = &mut page.form else {
                return false;
            };
            if form.saving || form.reading_image {
                return false;
            }
            let product = match form.validated() {
                Ok(product) => product,
                Err(e) => {
                    form.error = Some(e.to_string());
                    return true;
                }
            };
            form.saving = true;
            save(ctx, product);
            true
        }
        Msg::Saved(result) => {
            match result {
                Ok(product) => {
                    show_toast(&format!("Produit « {} » enregistré", product.name));
                    match page.products.iter_mut().find(|p| p.id == product.id) {
                        Some(slot) => *slot = product,
                        None => {
                            page.total += 1;
                            page.products.insert(0, product);
                        }
                    }
                    page.form = None;
                }
                Err(e) => {
                    if let Some(form) = &mut page.form {
                        form.saving = false;
                    }
                    report_failure(&e, "Erreur lors de l'enregistrement du produit", &props.on_unauthorized);
                }
            }
            true
        }
        Msg::ToggleAvailable(mut product) => {
            product.available = !product.available;
            save(ctx, product);
            false
        }
        Msg::AskDelete(product) => {
            page.deleting = Some(product);
            true
        }
        Msg::ConfirmDelete => {
            let Some(product) = page.deleting.take() else {
                return false;
            };
            let api = props.api();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = products::delete(&api, &product.id).await;
                link.send_message(Msg::Deleted(product.id, result));
            });
            true
        }
        Msg::Deleted(id, result) => {
            match result {
                Ok(()) => {
                    page.products.retain(|p| p.id != id);
                    page.total = page.total.saturating_sub(1);
                    show_toast("Produit supprimé");
                }
                Err(e) => report_failure(&e, "Erreur lors de la suppression du produit", &props.on_unauthorized),
            }
            true
        }
    }
}

fn save(ctx: &Context<ProductsPage>, product: Product) {
    let api = ctx.props().api();
    let link = ctx.link().clone();
    spawn_local(async move {
        let result = if product.id.is_empty() {
            products::create(&api, &product).await
        } else {
            products::update(&api, &product).await
        };
        link.send_message(Msg::Saved(result));
    });
}
