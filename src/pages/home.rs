use yew::prelude::*;

use crate::sections::benefit::Benefit;
use crate::sections::best_selling::BestSelling;
use crate::sections::feature_cards::FeatureCards;
use crate::sections::hero::Hero;
use crate::sections::highlight::Highlight;
use crate::sections::intro_loader::IntroProvider;
use crate::sections::navbar::Navbar;
use crate::sections::newsletter::Newsletter;
use crate::sections::product_section::ProductSection;
use crate::sections::testimonials::Testimonials;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <IntroProvider>
            <Navbar />
            <main>
                <Hero />
                <FeatureCards />
                <BestSelling />
                <Benefit />
                <Highlight />
                <Testimonials />
                <ProductSection />
                <Newsletter />
            </main>
        </IntroProvider>
    }
}
